//! Chime playback through the system audio device

use std::{
    sync::mpsc::{self, Sender},
    thread::{self, JoinHandle},
};

use anyhow::{anyhow, Result};
use rodio::{OutputStream, Sink};
use tracing::{debug, info, warn};

use super::{alert::AlertPlayer, chime::Chime};

/// Plays [`Chime`] on a dedicated audio thread.
///
/// The output stream is not `Send`, so it is opened and kept on that thread;
/// this handle only forwards play requests. Chimes are queued on one
/// [`Sink`] so [`AlertPlayer::finish`] can wait for the last one to end.
pub struct ChimePlayer {
    tx: Option<Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

impl ChimePlayer {
    /// Open the default output device. Fails if no device is available.
    pub fn spawn() -> Result<Self> {
        let (tx, rx) = mpsc::channel::<()>();
        let (ready_tx, ready_rx) = mpsc::channel::<Result<(), String>>();

        let thread = thread::Builder::new()
            .name("chime-audio".to_string())
            .spawn(move || {
                let opened = OutputStream::try_default()
                    .map_err(|e| format!("Failed to open audio output: {}", e))
                    .and_then(|(stream, handle)| {
                        Sink::try_new(&handle)
                            .map(|sink| (stream, sink))
                            .map_err(|e| format!("Failed to create audio sink: {}", e))
                    });
                let (_stream, sink) = match opened {
                    Ok(pair) => {
                        let _ = ready_tx.send(Ok(()));
                        pair
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e));
                        return;
                    }
                };

                while rx.recv().is_ok() {
                    sink.append(Chime::new());
                }

                // Sender closed: let the queued chime play out before the stream goes
                sink.sleep_until_end();
                debug!("Audio thread exiting");
            })?;

        ready_rx
            .recv()
            .map_err(|_| anyhow!("audio thread exited during start-up"))?
            .map_err(anyhow::Error::msg)?;

        info!("Audio output ready");
        Ok(Self {
            tx: Some(tx),
            thread: Some(thread),
        })
    }
}

impl AlertPlayer for ChimePlayer {
    fn play(&mut self) {
        let sent = self.tx.as_ref().map(|tx| tx.send(()).is_ok()).unwrap_or(false);
        if !sent {
            warn!("Audio thread is gone, chime dropped");
        }
    }

    fn finish(&mut self) {
        drop(self.tx.take());
        if let Some(thread) = self.thread.take() {
            debug!("Waiting for the chime to finish");
            if thread.join().is_err() {
                warn!("Audio thread panicked");
            }
        }
    }
}
