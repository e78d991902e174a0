//! State management module
//!
//! This module contains the countdown state and its transitions. It performs
//! no scheduling of its own.

pub mod timer_state;

// Re-export main types
pub use timer_state::{TimerSnapshot, TimerState, TimerStatus};
