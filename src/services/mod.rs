//! Alert output module
//!
//! This module contains the alert player capability the countdown controller
//! calls on completion, and the players behind it.

pub mod alert;
pub mod chime;
#[cfg(feature = "audio")]
pub mod audio;

use tracing::warn;

use crate::config::AlertKind;

// Re-export main types
pub use alert::{AlertPlayer, Muted, TerminalBell};
pub use chime::Chime;
#[cfg(feature = "audio")]
pub use audio::ChimePlayer;

/// Build the alert player selected on the command line.
///
/// The chime falls back to the terminal bell when no audio output can be used.
pub fn build_alert_player(kind: AlertKind) -> Box<dyn AlertPlayer + Send> {
    match kind {
        AlertKind::Bell => Box::new(TerminalBell::new()),
        AlertKind::None => Box::new(Muted),
        AlertKind::Chime => chime_player(),
    }
}

#[cfg(feature = "audio")]
fn chime_player() -> Box<dyn AlertPlayer + Send> {
    match ChimePlayer::spawn() {
        Ok(player) => Box::new(player),
        Err(e) => {
            warn!("{}, falling back to terminal bell", e);
            Box::new(TerminalBell::new())
        }
    }
}

#[cfg(not(feature = "audio"))]
fn chime_player() -> Box<dyn AlertPlayer + Send> {
    warn!("Built without the `audio` feature, falling back to terminal bell");
    Box::new(TerminalBell::new())
}
