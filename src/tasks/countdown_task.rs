//! Countdown background task
//!
//! The single owner of the controller. Commands from the input side and
//! events from the scheduled timers are applied strictly one at a time, and
//! every resulting state is published for the display.
//!
//! Once the command channel closes no further input can arrive, so a running
//! countdown is allowed to finish (and alert once) before the task returns.
//! The controller is handed back so the caller can let the alert play out.

use tokio::sync::{mpsc, watch};
use tracing::{debug, info};

use crate::{
    controller::{Countdown, Scheduler, TimerEvent},
    parser::Seconds,
    services::AlertPlayer,
    state::{TimerSnapshot, TimerStatus},
};

/// Requests accepted by the countdown task
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Free-text duration to parse and start
    Submit(String),
    Start(Seconds),
    Toggle,
    Reset,
}

/// Run until the command channel is closed and the countdown is no longer
/// running, then return the controller. Dropping `snapshots` on return ends
/// the renderer.
pub async fn countdown_task<S, A>(
    mut countdown: Countdown<S, A>,
    mut commands: mpsc::Receiver<Command>,
    mut timer_events: mpsc::UnboundedReceiver<TimerEvent>,
    snapshots: watch::Sender<TimerSnapshot>,
) -> Countdown<S, A>
where
    S: Scheduler,
    A: AlertPlayer,
{
    info!("Starting countdown task");
    publish(&countdown, &snapshots);

    let mut input_open = true;

    loop {
        if !input_open && countdown.status() != TimerStatus::Running {
            break;
        }

        tokio::select! {
            command = commands.recv(), if input_open => {
                match command {
                    Some(command) => {
                        debug!("Received command: {:?}", command);
                        apply(&mut countdown, command);
                    }
                    None => {
                        info!("Command channel closed");
                        input_open = false;
                    }
                }
            }

            Some(event) = timer_events.recv() => {
                countdown.on_timer(event);
            }
        }

        publish(&countdown, &snapshots);
    }

    info!("Countdown task finished ({})", countdown.status().as_str());
    countdown
}

fn apply<S: Scheduler, A: AlertPlayer>(countdown: &mut Countdown<S, A>, command: Command) {
    match command {
        Command::Submit(text) => {
            // The error is kept in the state and shown with the next snapshot
            let _ = countdown.submit(&text);
        }
        Command::Start(duration) => countdown.start(duration),
        Command::Toggle => countdown.toggle(),
        Command::Reset => countdown.reset(),
    }
}

fn publish<S: Scheduler, A: AlertPlayer>(
    countdown: &Countdown<S, A>,
    snapshots: &watch::Sender<TimerSnapshot>,
) {
    let next = countdown.snapshot();
    snapshots.send_if_modified(|current| {
        if *current == next {
            false
        } else {
            *current = next;
            true
        }
    });
}
