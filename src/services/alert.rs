//! Alert player capability and the simple players

use std::io::{self, Stdout, Write};
use tracing::{info, warn};

/// Something that can make the completion alert happen.
///
/// Playback problems are logged by the implementation; the caller never sees them.
pub trait AlertPlayer {
    fn play(&mut self);

    /// Block until any alert still sounding has finished. Called once before
    /// the player is dropped on the way out.
    fn finish(&mut self) {}
}

impl<P: AlertPlayer + ?Sized> AlertPlayer for Box<P> {
    fn play(&mut self) {
        (**self).play();
    }

    fn finish(&mut self) {
        (**self).finish();
    }
}

/// Rings the terminal bell
pub struct TerminalBell<W: Write = Stdout> {
    out: W,
}

impl TerminalBell<Stdout> {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalBell<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalBell<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self) -> io::Result<()> {
        self.out.write_all(b"\x07")?;
        self.out.flush()
    }
}

impl<W: Write> AlertPlayer for TerminalBell<W> {
    fn play(&mut self) {
        if let Err(e) = self.ring() {
            warn!("Failed to ring terminal bell: {}", e);
        }
    }
}

/// Makes no sound; the alert only shows up in the log
#[derive(Debug, Default)]
pub struct Muted;

impl AlertPlayer for Muted {
    fn play(&mut self) {
        info!("Countdown complete (alert muted)");
    }
}
