//! Tokio-backed timer scheduler

use std::time::Duration;
use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant},
};
use tracing::debug;

use crate::controller::{Scheduler, TimerEvent, TimerHandle, TimerId, TimerKind};

/// Runs each timer as its own task feeding a shared event channel
#[derive(Debug)]
pub struct TokioScheduler {
    events_tx: mpsc::UnboundedSender<TimerEvent>,
    next_id: u64,
}

impl TokioScheduler {
    /// Create a scheduler and the receiver its timer events arrive on
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        (Self { events_tx, next_id: 0 }, events_rx)
    }
}

/// A running timer task, aborted when the handle is dropped
#[derive(Debug)]
pub struct TokioTimer {
    id: TimerId,
    task: JoinHandle<()>,
}

impl TimerHandle for TokioTimer {
    fn id(&self) -> TimerId {
        self.id
    }
}

impl Drop for TokioTimer {
    fn drop(&mut self) {
        self.task.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TokioTimer;

    fn schedule(&mut self, kind: TimerKind, period: Duration) -> TokioTimer {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        let events_tx = self.events_tx.clone();
        let first = Instant::now() + period;

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(first, period);
            loop {
                interval.tick().await;
                if events_tx.send(TimerEvent { kind, id }).is_err() {
                    debug!("Timer {:?} lost its receiver, stopping", id);
                    break;
                }
            }
        });

        TokioTimer { id, task }
    }
}
