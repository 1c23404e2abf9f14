//! Video playback sequencing for the service showcase.
//!
//! The sequencer is a pure reducer: the DOM layer feeds it `serviceChange`
//! payloads and executes the returned command batch, in order, against the
//! real video elements. Batch order is part of the contract: hides come
//! first and the single reveal last, so at every observable instant at
//! most one video carries the visibility class.

use smallvec::SmallVec;

/// How a hidden clip's playhead is reset.
///
/// `Deferred` pushes the reset to the next event-loop turn so a CSS hide
/// transition keeps rendering the clip's last frame instead of snapping to
/// frame zero mid-fade.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rewind {
    Now,
    Deferred,
}

/// One DOM-side effect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MediaCommand {
    /// Pause a service clip, drop its visibility, reset its playhead.
    HideClip { clip: usize, rewind: Rewind },
    /// Pause the idle video without showing it.
    ParkIdle,
    /// Rewind the idle video, mark it visible, start playback.
    ShowIdle,
    /// Rewind a service clip, mark it visible, start playback.
    ShowClip { clip: usize },
}

/// A service clip as discovered from markup; its index is its handle.
/// Two clips may share a service id (paired intro/loop footage); id lookup
/// resolves to the first in markup order and hides cover every clip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClipBinding {
    pub service: String,
}

pub type CommandBatch = SmallVec<[MediaCommand; 8]>;

#[derive(Clone, Debug)]
pub struct Sequencer {
    clips: Vec<ClipBinding>,
    active: Option<usize>,
    ready: bool,
}

impl Sequencer {
    pub fn new(clips: Vec<ClipBinding>) -> Self {
        Self {
            clips,
            active: None,
            ready: false,
        }
    }

    /// Notifications are dropped until the asset gate has flipped.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Service id of the clip currently on screen, if any.
    pub fn active_service(&self) -> Option<&str> {
        self.active.map(|i| self.clips[i].service.as_str())
    }

    pub fn clip_count(&self) -> usize {
        self.clips.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.clips.iter().position(|c| c.service == id)
    }

    /// Flip the gate and synthesize the first transition so the showcase
    /// never sits with nothing visible. Idempotent.
    pub fn mark_ready(&mut self) -> CommandBatch {
        if self.ready {
            return CommandBatch::new();
        }
        self.ready = true;
        self.go_idle(Rewind::Now)
    }

    /// Reduce one `serviceChange` notification into DOM commands.
    pub fn on_service_change(&mut self, next: Option<&str>) -> CommandBatch {
        if !self.ready {
            return CommandBatch::new();
        }
        let same = matches!((next, self.active_service()), (Some(n), Some(cur)) if n == cur);
        if same {
            // Re-click of the active tab toggles back to idle. Rewinds are
            // deferred so the hide transition keeps its last frame.
            return self.go_idle(Rewind::Deferred);
        }
        let mut batch = CommandBatch::new();
        for clip in 0..self.clips.len() {
            batch.push(MediaCommand::HideClip {
                clip,
                rewind: Rewind::Now,
            });
        }
        match next.and_then(|id| self.index_of(id)) {
            Some(target) => {
                self.active = Some(target);
                batch.push(MediaCommand::ParkIdle);
                batch.push(MediaCommand::ShowClip { clip: target });
            }
            None => {
                // null or unmatched id falls back to the idle video
                self.active = None;
                batch.push(MediaCommand::ShowIdle);
            }
        }
        batch
    }

    fn go_idle(&mut self, rewind: Rewind) -> CommandBatch {
        let mut batch = CommandBatch::new();
        for clip in 0..self.clips.len() {
            batch.push(MediaCommand::HideClip { clip, rewind });
        }
        self.active = None;
        batch.push(MediaCommand::ShowIdle);
        batch
    }
}
