//! Countdown controller
//!
//! Wraps a [`TimerState`] and keeps the scheduled timers in step with it:
//! a tick timer exists exactly while the countdown is running and an alert
//! timer exists exactly while it is complete. Every operation applies the
//! state transition first and then reconciles the timers.

use tracing::{debug, info, warn};

use crate::{
    parser::{parse_duration, ParseError, Seconds},
    services::AlertPlayer,
    state::{TimerSnapshot, TimerState, TimerStatus},
};

use super::scheduler::{Scheduler, TimerEvent, TimerHandle, TimerKind};

pub struct Countdown<S: Scheduler, A: AlertPlayer> {
    state: TimerState,
    scheduler: S,
    alert: A,
    tick_timer: Option<S::Handle>,
    alert_timer: Option<S::Handle>,
}

impl<S: Scheduler, A: AlertPlayer> Countdown<S, A> {
    pub fn new(scheduler: S, alert: A) -> Self {
        Self {
            state: TimerState::new(),
            scheduler,
            alert,
            tick_timer: None,
            alert_timer: None,
        }
    }

    pub fn state(&self) -> &TimerState {
        &self.state
    }

    pub fn status(&self) -> TimerStatus {
        self.state.status()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        self.state.snapshot()
    }

    /// Start a fresh countdown. A zero duration is ignored.
    pub fn start(&mut self, duration: Seconds) {
        if duration == 0 {
            debug!("Ignoring start with zero duration");
            return;
        }

        let before = self.state.status();
        // Whatever was scheduled belongs to the previous countdown
        self.cancel_tick_timer();
        self.cancel_alert_timer();

        self.state.start(duration);
        info!("Countdown started: {}s", duration);
        self.sync_timers(before);
    }

    /// Parse user input and start a countdown from it.
    ///
    /// On failure the message is kept in the state for display and the
    /// running countdown, if any, is left alone.
    pub fn submit(&mut self, input: &str) -> Result<Seconds, ParseError> {
        match parse_duration(input) {
            Ok(duration) => {
                self.start(duration);
                Ok(duration)
            }
            Err(e) => {
                warn!("Could not parse duration {:?}: {}", e.input(), e);
                self.state.set_error(e.to_string());
                Err(e)
            }
        }
    }

    /// Apply one elapsed second
    pub fn tick(&mut self) {
        let before = self.state.status();
        if self.state.tick() {
            info!("Countdown complete");
        } else {
            debug!("Tick: {}s remaining", self.state.remaining_seconds());
        }
        self.sync_timers(before);
    }

    /// Pause, resume, or acknowledge a finished countdown
    pub fn toggle(&mut self) {
        let before = self.state.status();
        self.state.toggle();
        info!("Toggle: {} -> {}", before.as_str(), self.state.status().as_str());
        self.sync_timers(before);
    }

    /// Return to idle from any state
    pub fn reset(&mut self) {
        let before = self.state.status();
        self.state.reset();
        if before != TimerStatus::Idle {
            info!("Countdown reset");
        }
        self.sync_timers(before);
    }

    /// Handle a fired timer. Events from timers that are no longer current are dropped.
    pub fn on_timer(&mut self, event: TimerEvent) {
        let current = match event.kind {
            TimerKind::Tick => self.tick_timer.as_ref(),
            TimerKind::Alert => self.alert_timer.as_ref(),
        }
        .map(|handle| handle.id());

        if current != Some(event.id) {
            debug!("Dropping stale {:?} event from timer {:?}", event.kind, event.id);
            return;
        }

        match event.kind {
            TimerKind::Tick => self.tick(),
            TimerKind::Alert => {
                debug!("Repeating completion alert");
                self.alert.play();
            }
        }
    }

    /// Stop every timer and wait for the alert player to fall silent
    pub fn finish(mut self) {
        self.cancel_tick_timer();
        self.cancel_alert_timer();
        self.alert.finish();
        info!("Countdown finished ({})", self.state.status().as_str());
    }

    fn sync_timers(&mut self, before: TimerStatus) {
        let now = self.state.status();

        // Cancel before scheduling anything new
        if now != TimerStatus::Running {
            self.cancel_tick_timer();
        }
        if now != TimerStatus::Complete {
            self.cancel_alert_timer();
        }

        if now == TimerStatus::Running && self.tick_timer.is_none() {
            let handle = self.scheduler.schedule(TimerKind::Tick, TimerKind::Tick.period());
            debug!("Scheduled tick timer {:?}", handle.id());
            self.tick_timer = Some(handle);
        }

        if now == TimerStatus::Complete && before != TimerStatus::Complete {
            self.alert.play();
            if self.alert_timer.is_none() {
                let handle = self.scheduler.schedule(TimerKind::Alert, TimerKind::Alert.period());
                debug!("Scheduled alert timer {:?}", handle.id());
                self.alert_timer = Some(handle);
            }
        }
    }

    fn cancel_tick_timer(&mut self) {
        if let Some(handle) = self.tick_timer.take() {
            debug!("Cancelling tick timer {:?}", handle.id());
        }
    }

    fn cancel_alert_timer(&mut self) {
        if let Some(handle) = self.alert_timer.take() {
            debug!("Cancelling alert timer {:?}", handle.id());
        }
    }
}
