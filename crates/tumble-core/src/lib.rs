pub mod fan;
pub mod readiness;
pub mod sequencer;
pub mod tabs;

pub use fan::*;
pub use readiness::*;
pub use sequencer::*;
pub use tabs::*;
