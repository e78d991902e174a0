//! Line-oriented input: each line is a command or a duration

use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tracing::{debug, info, warn};

use crate::tasks::Command;

/// What one input line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Quit,
}

/// Why the input task stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEnd {
    /// The user asked to quit
    Quit,
    /// Input reached end of file
    Eof,
    /// The countdown task is gone
    Closed,
}

/// Interpret one line. Anything that is not a known keyword is treated as a duration.
pub fn interpret(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "" | "t" | "toggle" | "pause" | "resume" | "ok" => Input::Command(Command::Toggle),
        "r" | "reset" => Input::Command(Command::Reset),
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Command(Command::Submit(trimmed.to_string())),
    }
}

/// Forward input lines to the countdown task until quit or end of input
pub async fn input_task<R>(reader: R, commands: mpsc::Sender<Command>) -> InputEnd
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => {
                debug!("End of input");
                return InputEnd::Eof;
            }
            Err(e) => {
                warn!("Failed to read input: {}", e);
                return InputEnd::Eof;
            }
        };

        match interpret(&line) {
            Input::Quit => {
                info!("Quit requested");
                return InputEnd::Quit;
            }
            Input::Command(command) => {
                if commands.send(command).await.is_err() {
                    warn!("Countdown task stopped, no longer reading input");
                    return InputEnd::Closed;
                }
            }
        }
    }
}

/// Short help shown at start-up
pub fn usage() -> &'static str {
    "Type a duration (\"5 minutes\", \"1h 30m\", \"half an hour\") and press Enter. \
     Enter on its own pauses, resumes or silences the alert; \"reset\" clears; \"quit\" exits."
}
