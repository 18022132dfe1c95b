pub mod ports;
pub mod prompt;
pub mod reply;

pub use ports::*;
pub use prompt::*;
pub use reply::*;
