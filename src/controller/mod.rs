//! Countdown controller module
//! 
//! This module contains the controller that drives the timer state machine
//! and the scheduling abstraction it relies on.

pub mod countdown;
pub mod scheduler;

// Re-export main types
pub use countdown::Countdown;
pub use scheduler::{Scheduler, TimerEvent, TimerHandle, TimerId, TimerKind, ALERT_PERIOD, TICK_PERIOD};
