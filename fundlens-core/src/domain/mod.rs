//! Domain types: funding events and the Low/Medium/High rating.

pub mod event;
pub mod level;

pub use event::FundingEvent;
pub use level::{Level, ParseLevelError};
