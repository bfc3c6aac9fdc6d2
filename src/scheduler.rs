//! Virtual-time timer scheduler
//!
//! Owns every one-shot and recurring timer of the deck. Time only moves when
//! the owner calls [`Scheduler::advance`], so the TUI can drive it with
//! wall-clock frame deltas while tests drive it by hand.

use std::time::Duration;
use thiserror::Error;

/// Handle to a scheduled timer. Pass it back to [`Scheduler::cancel`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    /// A recurring timer with a zero interval would fire forever within one advance.
    #[error("Recurring timer interval must be greater than zero")]
    ZeroInterval,
}

#[derive(Debug, Clone, Copy)]
enum TimerKind {
    Once,
    Repeating(Duration),
}

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    due: Duration,
    kind: TimerKind,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since the scheduler was created.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Fire once, `delay` after now.
    pub fn schedule_once(&mut self, delay: Duration) -> TimerId {
        self.push(self.now + delay, TimerKind::Once)
    }

    /// Fire every `interval`, first firing one interval from now.
    pub fn schedule_repeating(&mut self, interval: Duration) -> Result<TimerId, SchedulerError> {
        if interval.is_zero() {
            return Err(SchedulerError::ZeroInterval);
        }
        Ok(self.push(self.now + interval, TimerKind::Repeating(interval)))
    }

    /// Cancel a timer. Returns false if it already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Cancel every timer.
    pub fn clear(&mut self) {
        self.timers.clear();
    }

    /// Move time forward by `elapsed` and return every firing that became due,
    /// ordered by due time then by creation order.
    ///
    /// A recurring timer appears once per interval crossed, so a long frame
    /// catches up instead of dropping ticks.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<TimerId> {
        let target = self.now + elapsed;
        let mut fired = Vec::new();

        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, timer)| timer.due <= target)
                .min_by_key(|(_, timer)| (timer.due, timer.id))
                .map(|(index, _)| index);

            let Some(index) = next else {
                break;
            };

            let Timer { id, due, kind } = self.timers[index].clone();
            self.now = due;
            fired.push(id);
            match kind {
                TimerKind::Once => {
                    self.timers.swap_remove(index);
                }
                TimerKind::Repeating(interval) => self.timers[index].due += interval,
            }
        }

        self.now = target;
        fired
    }

    fn push(&mut self, due: Duration, kind: TimerKind) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer { id, due, kind });
        id
    }
}
