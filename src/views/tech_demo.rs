//! Technology demo: feature tabs and the delivery phase player

use crate::content::{PHASES, Technology};
use crate::jitter::JitterLoop;
use crate::router::Selector;
use crate::scheduler::{Scheduler, SchedulerError, TimerId};
use std::time::Duration;

/// Steps through the delivery phases on a recurring timer while playing.
#[derive(Debug)]
pub struct PhasePlayer {
    phase: usize,
    ticker: JitterLoop,
}

impl PhasePlayer {
    pub fn new(interval: Duration) -> Self {
        Self {
            phase: 0,
            ticker: JitterLoop::new(interval),
        }
    }

    pub fn phase(&self) -> usize {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.ticker.is_running()
    }

    /// Play or pause. Returns whether the player is now playing.
    pub fn toggle(&mut self, scheduler: &mut Scheduler) -> Result<bool, SchedulerError> {
        if self.ticker.is_running() {
            self.ticker.stop(scheduler);
            Ok(false)
        } else {
            self.ticker.start(scheduler)?;
            Ok(true)
        }
    }

    /// Stop and rewind to the first phase.
    pub fn reset(&mut self, scheduler: &mut Scheduler) {
        self.ticker.stop(scheduler);
        self.phase = 0;
    }

    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.ticker.owns(id) {
            return false;
        }
        self.phase = (self.phase + 1) % PHASES.len();
        true
    }
}

#[derive(Debug)]
pub struct TechDemoView {
    pub tab: Selector<Technology>,
    pub player: PhasePlayer,
}

impl TechDemoView {
    pub fn new(phase_interval: Duration) -> Self {
        Self {
            tab: Selector::new(),
            player: PhasePlayer::new(phase_interval),
        }
    }

    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        self.player.reset(scheduler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advance(scheduler: &mut Scheduler, player: &mut PhasePlayer, ms: u64) {
        for id in scheduler.advance(Duration::from_millis(ms)) {
            player.on_timer(id);
        }
    }

    #[test]
    fn test_paused_player_does_not_advance() {
        let mut scheduler = Scheduler::new();
        let mut player = PhasePlayer::new(Duration::from_millis(2000));
        advance(&mut scheduler, &mut player, 10_000);
        assert_eq!(player.phase(), 0);
    }

    #[test]
    fn test_playing_wraps_after_last_phase() {
        let mut scheduler = Scheduler::new();
        let mut player = PhasePlayer::new(Duration::from_millis(2000));
        assert!(player.toggle(&mut scheduler).unwrap());

        advance(&mut scheduler, &mut player, 8000);
        assert_eq!(player.phase(), 4);
        advance(&mut scheduler, &mut player, 2000);
        assert_eq!(player.phase(), 0);
    }

    #[test]
    fn test_pause_keeps_phase_and_reset_rewinds() {
        let mut scheduler = Scheduler::new();
        let mut player = PhasePlayer::new(Duration::from_millis(2000));
        player.toggle(&mut scheduler).unwrap();
        advance(&mut scheduler, &mut player, 4000);

        assert!(!player.toggle(&mut scheduler).unwrap());
        advance(&mut scheduler, &mut player, 10_000);
        assert_eq!(player.phase(), 2);

        player.reset(&mut scheduler);
        assert_eq!(player.phase(), 0);
        assert!(!player.is_playing());
        assert_eq!(scheduler.pending(), 0);
    }
}
