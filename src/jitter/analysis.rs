//! Timed "processing" flag behind the Run Live Analysis action

use crate::scheduler::{Scheduler, TimerId};
use std::time::Duration;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnalysisState {
    Idle,
    Processing { timer: TimerId, started_at: Duration },
}

/// `idle -> processing` on request, `processing -> idle` when the one-shot
/// timer fires.
#[derive(Debug)]
pub struct AnalysisRun {
    duration: Duration,
    state: AnalysisState,
}

impl AnalysisRun {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            state: AnalysisState::Idle,
        }
    }

    pub fn state(&self) -> AnalysisState {
        self.state
    }

    pub fn is_processing(&self) -> bool {
        matches!(self.state, AnalysisState::Processing { .. })
    }

    /// Start processing. Ignored while already processing.
    pub fn run(&mut self, scheduler: &mut Scheduler) -> bool {
        if self.is_processing() {
            return false;
        }
        let timer = scheduler.schedule_once(self.duration);
        self.state = AnalysisState::Processing {
            timer,
            started_at: scheduler.now(),
        };
        true
    }

    /// Returns true when `id` completed the running analysis.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        match self.state {
            AnalysisState::Processing { timer, .. } if timer == id => {
                self.state = AnalysisState::Idle;
                true
            }
            _ => false,
        }
    }

    /// Abort without completing. Used on teardown.
    pub fn cancel(&mut self, scheduler: &mut Scheduler) {
        if let AnalysisState::Processing { timer, .. } = self.state {
            scheduler.cancel(timer);
        }
        self.state = AnalysisState::Idle;
    }

    /// Fraction of the run elapsed at `now`, 0 when idle.
    pub fn progress(&self, now: Duration) -> f64 {
        match self.state {
            AnalysisState::Processing { started_at, .. } if !self.duration.is_zero() => {
                let elapsed = now.saturating_sub(started_at);
                (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
            }
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn fire(scheduler: &mut Scheduler, run: &mut AnalysisRun, elapsed: u64) -> bool {
        scheduler
            .advance(ms(elapsed))
            .into_iter()
            .any(|id| run.on_timer(id))
    }

    #[test]
    fn test_auto_resets_after_duration() {
        let mut scheduler = Scheduler::new();
        let mut run = AnalysisRun::new(ms(3000));

        assert!(run.run(&mut scheduler));
        assert!(run.is_processing());
        assert!(!fire(&mut scheduler, &mut run, 2999));
        assert!(run.is_processing());
        assert!((run.progress(scheduler.now()) - 2999.0 / 3000.0).abs() < 1e-9);

        assert!(fire(&mut scheduler, &mut run, 1));
        assert_eq!(run.state(), AnalysisState::Idle);
        assert_eq!(run.progress(scheduler.now()), 0.0);
    }

    #[test]
    fn test_run_while_processing_is_ignored() {
        let mut scheduler = Scheduler::new();
        let mut run = AnalysisRun::new(ms(3000));
        assert!(run.run(&mut scheduler));
        scheduler.advance(ms(1000));
        assert!(!run.run(&mut scheduler));
        assert_eq!(scheduler.pending(), 1);

        // Completes at the original 3000, not 4000
        assert!(fire(&mut scheduler, &mut run, 2000));
    }

    #[test]
    fn test_cancel_removes_timer() {
        let mut scheduler = Scheduler::new();
        let mut run = AnalysisRun::new(ms(3000));
        run.run(&mut scheduler);
        run.cancel(&mut scheduler);

        assert!(!run.is_processing());
        assert_eq!(scheduler.pending(), 0);
        assert!(!fire(&mut scheduler, &mut run, 5000));
    }
}
