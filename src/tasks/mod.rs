//! Background tasks module
//!
//! This module contains the countdown task and the tokio scheduler that feeds it.

pub mod countdown_task;
pub mod tokio_scheduler;

// Re-export main items
pub use countdown_task::{countdown_task, Command};
pub use tokio_scheduler::{TokioScheduler, TokioTimer};
