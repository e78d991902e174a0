//! Countdown Chime - a countdown timer driven by natural-language durations
//! 
//! This library parses durations such as "5 minutes" or "1h 30m", runs the
//! countdown state machine with its tick and alert timers, and plays a chime
//! when the time is up.

pub mod config;
pub mod console;
pub mod controller;
pub mod parser;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use controller::Countdown;
pub use parser::{parse_duration, ParseError};
pub use state::{TimerSnapshot, TimerState, TimerStatus};
pub use tasks::{countdown_task, Command, TokioScheduler};
pub use utils::signals::shutdown_signal;
