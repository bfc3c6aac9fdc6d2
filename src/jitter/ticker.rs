//! Recurring jitter loop

use super::snapshot::MetricSnapshot;
use super::source::DeltaSource;
use crate::scheduler::{Scheduler, SchedulerError, TimerId};
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    /// Holds the handle of the recurring tick timer.
    Running(TimerId),
}

/// Two-state loop: `start` schedules a recurring tick, `stop` cancels it.
#[derive(Debug)]
pub struct JitterLoop {
    interval: Duration,
    state: LoopState,
}

impl JitterLoop {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            state: LoopState::Idle,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, LoopState::Running(_))
    }

    /// idle -> running. Starting a running loop keeps its existing timer.
    pub fn start(&mut self, scheduler: &mut Scheduler) -> Result<TimerId, SchedulerError> {
        if let LoopState::Running(id) = self.state {
            return Ok(id);
        }
        let id = scheduler.schedule_repeating(self.interval)?;
        self.state = LoopState::Running(id);
        Ok(id)
    }

    /// running -> idle. Returns false when already idle.
    pub fn stop(&mut self, scheduler: &mut Scheduler) -> bool {
        match self.state {
            LoopState::Running(id) => {
                scheduler.cancel(id);
                self.state = LoopState::Idle;
                true
            }
            LoopState::Idle => false,
        }
    }

    /// Whether a fired timer is this loop's tick.
    pub fn owns(&self, id: TimerId) -> bool {
        self.state == LoopState::Running(id)
    }
}

/// A snapshot bound to the loop that jitters it.
#[derive(Debug)]
pub struct LiveMetrics {
    snapshot: MetricSnapshot,
    ticker: JitterLoop,
}

impl LiveMetrics {
    pub fn new(snapshot: MetricSnapshot, interval: Duration) -> Self {
        Self {
            snapshot,
            ticker: JitterLoop::new(interval),
        }
    }

    pub fn snapshot(&self) -> &MetricSnapshot {
        &self.snapshot
    }

    pub fn ticker(&self) -> &JitterLoop {
        &self.ticker
    }

    pub fn start(&mut self, scheduler: &mut Scheduler) -> Result<TimerId, SchedulerError> {
        self.ticker.start(scheduler)
    }

    pub fn stop(&mut self, scheduler: &mut Scheduler) -> bool {
        self.ticker.stop(scheduler)
    }

    /// Tick the snapshot if `id` is the running loop's timer. Stale ids from a
    /// stopped loop are ignored.
    pub fn on_timer(&mut self, id: TimerId, source: &mut dyn DeltaSource) -> bool {
        if !self.ticker.owns(id) {
            return false;
        }
        self.snapshot.tick(source);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::snapshot::Metric;
    use crate::jitter::source::RngDeltaSource;
    use crate::jitter::spec::JitterSpec;

    fn live(interval_ms: u64) -> LiveMetrics {
        let metric = Metric::new(
            "confidence",
            "Model Confidence",
            50.0,
            JitterSpec::new(-2.0, 2.0, 0.0, 100.0).unwrap(),
        );
        LiveMetrics::new(
            MetricSnapshot::new(vec![metric]),
            Duration::from_millis(interval_ms),
        )
    }

    fn drive(scheduler: &mut Scheduler, metrics: &mut LiveMetrics, ms: u64) -> usize {
        let mut source = RngDeltaSource::seeded(3);
        scheduler
            .advance(Duration::from_millis(ms))
            .into_iter()
            .filter(|id| metrics.on_timer(*id, &mut source))
            .count()
    }

    #[test]
    fn test_start_and_stop_transitions() {
        let mut scheduler = Scheduler::new();
        let mut ticker = JitterLoop::new(Duration::from_millis(2000));
        assert_eq!(ticker.state(), LoopState::Idle);

        let id = ticker.start(&mut scheduler).unwrap();
        assert_eq!(ticker.state(), LoopState::Running(id));
        // Idempotent start keeps the same timer
        assert_eq!(ticker.start(&mut scheduler).unwrap(), id);
        assert_eq!(scheduler.pending(), 1);

        assert!(ticker.stop(&mut scheduler));
        assert!(!ticker.stop(&mut scheduler));
        assert_eq!(ticker.state(), LoopState::Idle);
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_ticks_once_per_interval_while_running() {
        let mut scheduler = Scheduler::new();
        let mut metrics = live(2000);
        metrics.start(&mut scheduler).unwrap();

        assert_eq!(drive(&mut scheduler, &mut metrics, 1999), 0);
        assert_eq!(drive(&mut scheduler, &mut metrics, 1), 1);
        assert_eq!(drive(&mut scheduler, &mut metrics, 6000), 3);
    }

    #[test]
    fn test_stop_prevents_further_mutation() {
        let mut scheduler = Scheduler::new();
        let mut metrics = live(2000);
        let id = metrics.start(&mut scheduler).unwrap();
        drive(&mut scheduler, &mut metrics, 4000);

        metrics.stop(&mut scheduler);
        let frozen = metrics.snapshot().clone();
        assert_eq!(drive(&mut scheduler, &mut metrics, 60_000), 0);
        assert_eq!(metrics.snapshot(), &frozen);

        // A stale handle delivered late is ignored too
        let mut source = RngDeltaSource::seeded(9);
        assert!(!metrics.on_timer(id, &mut source));
        assert_eq!(metrics.snapshot(), &frozen);
    }

    #[test]
    fn test_zero_interval_fails_to_start() {
        let mut scheduler = Scheduler::new();
        let mut metrics = live(0);
        assert_eq!(
            metrics.start(&mut scheduler),
            Err(SchedulerError::ZeroInterval)
        );
        assert!(!metrics.ticker().is_running());
    }
}
