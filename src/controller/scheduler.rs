//! Timer scheduling abstraction used by the countdown controller

use std::time::Duration;

/// Period of the countdown tick
pub const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Period of the repeating completion alert
pub const ALERT_PERIOD: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Tick,
    Alert,
}

impl TimerKind {
    pub fn period(self) -> Duration {
        match self {
            TimerKind::Tick => TICK_PERIOD,
            TimerKind::Alert => ALERT_PERIOD,
        }
    }
}

/// Identifies one scheduled timer for its whole life; never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Delivered to the controller each time a timer fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    pub kind: TimerKind,
    pub id: TimerId,
}

/// A live repeating timer. Dropping the handle cancels the timer.
pub trait TimerHandle {
    fn id(&self) -> TimerId;
}

/// Creates repeating timers
pub trait Scheduler {
    type Handle: TimerHandle;

    /// Start a repeating timer whose first event arrives one `period` from now
    fn schedule(&mut self, kind: TimerKind, period: Duration) -> Self::Handle;
}
