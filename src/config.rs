//! Configuration and CLI argument handling

use clap::{Parser, ValueEnum};

use crate::console::OutputFormat;

/// How the completion alert is played
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlertKind {
    /// Terminal bell character
    Bell,
    /// Two-tone chime through the audio device (needs the `audio` feature)
    Chime,
    /// No sound
    None,
}

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "countdown-chime")]
#[command(about = "A countdown timer that understands durations like \"5 minutes\" or \"1h 30m\"")]
#[command(version)]
pub struct Config {
    /// Duration to start counting down right away, e.g. `25 minutes`
    #[arg(value_name = "DURATION")]
    pub duration: Vec<String>,

    /// Alert to play when the countdown finishes
    #[arg(short, long, value_enum, default_value = "bell")]
    pub alert: AlertKind,

    /// Print each state change as a JSON line instead of a status line
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Duration words from the command line joined back into one input, if any
    pub fn initial_input(&self) -> Option<String> {
        if self.duration.is_empty() {
            None
        } else {
            Some(self.duration.join(" "))
        }
    }

    pub fn output_format(&self) -> OutputFormat {
        if self.json { OutputFormat::Json } else { OutputFormat::Text }
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
