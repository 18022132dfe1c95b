pub mod limits;
pub mod preview;
pub mod sequencer;

pub use limits::*;
pub use preview::*;
pub use sequencer::*;
