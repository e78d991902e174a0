//! Terminal surface module
//! 
//! This module contains the input side (lines typed by the user) and the
//! output side (status lines or JSON) of the countdown.

pub mod input;
pub mod render;

// Re-export main items
pub use input::{input_task, interpret, usage, Input, InputEnd};
pub use render::{render_line, render_task, write_snapshot, OutputFormat};
