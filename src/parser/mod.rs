//! Duration parsing module
//! 
//! This module turns free-text durations ("5 minutes", "1h 30m", "half an hour")
//! into a whole number of seconds.

pub mod duration;
pub mod error;

// Re-export main types
pub use duration::{parse_duration, Seconds};
pub use error::ParseError;
