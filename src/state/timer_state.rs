//! Timer state structure and transitions

use serde::Serialize;

use crate::parser::Seconds;

/// Externally visible status, derived from the stored flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    Idle,
    Running,
    Paused,
    Complete,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Complete => "complete",
        }
    }
}

/// Countdown state. Paused is not stored on its own: it is a timer with a
/// nonzero total that is neither running nor complete.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    total_seconds: Seconds,
    remaining_seconds: Seconds,
    running: bool,
    complete: bool,
    /// Last message from a failed submission, shown until the next start or reset
    error: Option<String>,
}

impl TimerState {
    /// Create an idle timer with zero duration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_seconds(&self) -> Seconds {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> Seconds {
        self.remaining_seconds
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> TimerStatus {
        if self.complete {
            TimerStatus::Complete
        } else if self.total_seconds == 0 {
            TimerStatus::Idle
        } else if self.running {
            TimerStatus::Running
        } else {
            TimerStatus::Paused
        }
    }

    /// True while ticks should be applied
    pub fn is_counting(&self) -> bool {
        self.running && self.remaining_seconds > 0
    }

    /// Fraction of the countdown already elapsed, in `0.0..=1.0`
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 0.0;
        }
        (self.total_seconds - self.remaining_seconds) as f64 / self.total_seconds as f64
    }

    /// Begin a fresh countdown. A zero duration leaves the state untouched.
    pub fn start(&mut self, duration: Seconds) -> bool {
        if duration == 0 {
            return false;
        }
        *self = Self {
            total_seconds: duration,
            remaining_seconds: duration,
            running: true,
            complete: false,
            error: None,
        };
        true
    }

    /// Apply one elapsed second. Returns true when this tick completed the countdown.
    pub fn tick(&mut self) -> bool {
        if !self.is_counting() {
            return false;
        }
        self.remaining_seconds -= 1;
        if self.remaining_seconds == 0 {
            self.running = false;
            self.complete = true;
            return true;
        }
        false
    }

    /// Acknowledge completion, or pause/resume an active countdown
    pub fn toggle(&mut self) {
        match self.status() {
            TimerStatus::Complete => self.reset(),
            TimerStatus::Idle => {}
            TimerStatus::Running | TimerStatus::Paused => self.running = !self.running,
        }
    }

    /// Return to idle, dropping totals and any stored error
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Record a failed submission without touching the countdown itself
    pub fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            status: self.status(),
            total_seconds: self.total_seconds,
            remaining_seconds: self.remaining_seconds,
            progress: self.progress(),
            error: self.error.clone(),
        }
    }
}

/// What the display surface consumes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerSnapshot {
    pub status: TimerStatus,
    pub total_seconds: Seconds,
    pub remaining_seconds: Seconds,
    pub progress: f64,
    pub error: Option<String>,
}

impl Default for TimerSnapshot {
    fn default() -> Self {
        TimerState::new().snapshot()
    }
}
