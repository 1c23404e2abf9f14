// Markup contract shared across installers: selectors, class names, and
// the broadcast event name.

pub const SERVICE_CHANGE_EVENT: &str = "serviceChange";

pub const TAB_SELECTOR: &str = ".service-tab";
pub const PANEL_SELECTOR: &str = ".service-panel";
pub const TABLIST_SELECTOR: &str = "[role=\"tablist\"]";
pub const ANIMATION_AREA_ID: &str = "service-animation";

pub const ACTIVE_TAB_CLASS: &str = "is-active";
pub const PANEL_FADE_CLASS: &str = "fade-up";

pub const CLIP_SELECTOR: &str = "video.service-video[data-service]";
pub const IDLE_VIDEO_ID: &str = "service-video-idle";
pub const VISIBLE_CLASS: &str = "is-visible";

pub const INTRO_SELECTOR: &str = "video.service-video[data-sequence=\"intro\"]";
pub const SPIN_SELECTOR: &str = "video.service-video[data-sequence=\"spin\"]";

// Mobile nav collapses above this width (mirror of the CSS breakpoint)
pub const NAV_BREAKPOINT_PX: f64 = 700.0;
