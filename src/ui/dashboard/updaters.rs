//! Dashboard state update logic
//!
//! Time advances and key presses are applied to the state here

use super::state::DashboardState;

use crate::events::{Event, EventType, Source};
use crate::logging::LogLevel;
use crate::router::SectionId;
use crate::views::SectionView;

use crossterm::event::KeyCode;
use std::time::Duration;

impl DashboardState {
    /// Advance the deck by `elapsed` of wall-clock (or simulated) time.
    /// Returns how many events were appended to the activity log.
    pub fn update(&mut self, elapsed: Duration) -> usize {
        self.tick += 1;

        for event in self.dispatch_timers(elapsed) {
            self.add_event(event);
        }
        self.settle_router();

        // Process all queued events one by one
        let mut processed = 0;
        while let Some(event) = self.pending_events.pop_front() {
            self.process_event(&event);
            self.add_to_activity_log(event);
            processed += 1;
        }
        processed
    }

    fn process_event(&self, event: &Event) {
        match event.event_type {
            EventType::StateChange => log::debug!("{}", event.msg),
            EventType::Error => log::error!("{}", event.msg),
            EventType::Warning => log::warn!("{}", event.msg),
            EventType::Success | EventType::Info => log::info!("{}", event.msg),
        }
    }

    /// Apply a key press. Quitting is handled by the caller.
    pub fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char(c @ '1'..='7') => {
                let ordinal = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(id) = SectionId::from_ordinal(ordinal) {
                    self.select_section(id);
                }
            }
            KeyCode::Tab | KeyCode::Right => self.next_section(),
            KeyCode::BackTab | KeyCode::Left => self.previous_section(),
            KeyCode::Char(']') => {
                let tab = self.view_mut().0.next_tab();
                self.log_tab(tab);
            }
            KeyCode::Char('[') => {
                let tab = self.view_mut().0.previous_tab();
                self.log_tab(tab);
            }
            KeyCode::Char(' ') => {
                let (view, scheduler) = self.view_mut();
                let event = match view.toggle_play(scheduler) {
                    Some(Ok(true)) => Event::info(Source::Player, "Delivery demo playing"),
                    Some(Ok(false)) => Event::info(Source::Player, "Delivery demo paused"),
                    Some(Err(e)) => Event::error(Source::Player, format!("Cannot play demo: {e}")),
                    None => return,
                };
                self.add_event(event);
            }
            KeyCode::Char('r') => {
                let (view, scheduler) = self.view_mut();
                if view.reset_player(scheduler) {
                    self.add_event(Event::info(Source::Player, "Delivery demo reset"));
                }
            }
            KeyCode::Enter => {
                let (view, scheduler) = self.view_mut();
                let on_ai_engine = matches!(view, SectionView::AiEngine(_));
                if view.run_analysis(scheduler) {
                    self.add_event(Event::info(Source::Analysis, "Running live analysis..."));
                } else if on_ai_engine {
                    self.add_event(Event::warning(Source::Analysis, "Analysis already running"));
                }
            }
            _ => {}
        }
    }

    fn log_tab(&mut self, tab: Option<&'static str>) {
        if let Some(title) = tab {
            self.add_event(Event::with_level(
                Source::Deck,
                format!("Viewing {title}"),
                EventType::Info,
                LogLevel::Debug,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::jitter::RngDeltaSource;
    use crate::jitter::source::MockDeltaSource;
    use crate::views::presets;

    fn deck() -> DashboardState {
        DashboardState::new(Config::default(), Box::new(RngDeltaSource::seeded(42))).unwrap()
    }

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn analysis_completed(state: &DashboardState) -> bool {
        state.activity_logs.iter().any(|event| {
            event.source == Source::Analysis && event.event_type == EventType::Success
        })
    }

    #[test]
    fn test_starts_on_overview_without_timers() {
        let state = deck();
        assert_eq!(state.current_section(), SectionId::Overview);
        assert!(state.metric_snapshot().is_none());
        assert_eq!(state.pending_timers(), 0);
    }

    #[test]
    fn test_select_then_read_yields_selection() {
        let mut state = deck();
        for id in [
            SectionId::Team,
            SectionId::Monitoring,
            SectionId::ClinicalData,
            SectionId::Overview,
        ] {
            state.select_section(id);
            assert_eq!(state.current_section(), id);
            assert_eq!(state.view().id(), id);
        }
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut state = deck();
        assert!(state.select_section_str("technology"));
        assert_eq!(state.current_section(), SectionId::Technology);

        assert!(!state.select_section_str("not-a-real-id"));
        assert_eq!(state.current_section(), SectionId::Technology);
        assert!(!state.select_section_str(""));
        assert_eq!(state.current_section(), SectionId::Technology);
    }

    #[test]
    fn test_monitoring_ticks_stay_in_bounds() {
        let mut state = deck();
        state.select_section(SectionId::Monitoring);
        for _ in 0..500 {
            state.update(ms(2000));
        }
        let snapshot = state.metric_snapshot().unwrap();
        for metric in snapshot.iter() {
            assert!(metric.spec().contains(metric.value()), "{}", metric.name);
        }
        let tumor = snapshot.get(presets::TUMOR_SIZE).unwrap();
        assert!(tumor <= 2.3 && tumor >= 0.1);
    }

    #[test]
    fn test_confidence_moves_on_every_tick() {
        let mut source = MockDeltaSource::new();
        source.expect_sample().returning(|_, max| max);
        let mut state = DashboardState::new(Config::default(), Box::new(source)).unwrap();
        state.select_section(SectionId::AiEngine);

        state.update(ms(1999));
        assert_eq!(state.metric_snapshot().unwrap().get(presets::CONFIDENCE), Some(50.0));
        state.update(ms(1));
        assert_eq!(state.metric_snapshot().unwrap().get(presets::CONFIDENCE), Some(60.0));
        state.update(ms(20_000));
        assert_eq!(state.metric_snapshot().unwrap().get(presets::CONFIDENCE), Some(100.0));
    }

    #[test]
    fn test_leaving_a_section_cancels_its_timers() {
        let mut state = deck();
        state.select_section(SectionId::Monitoring);
        assert_eq!(state.pending_timers(), 1);

        state.select_section(SectionId::Team);
        assert_eq!(state.pending_timers(), 0);
        assert!(state.metric_snapshot().is_none());
    }

    #[test]
    fn test_remount_restores_seed_values() {
        let mut state = deck();
        state.select_section(SectionId::Monitoring);
        for _ in 0..10 {
            state.update(ms(2000));
        }
        state.select_section(SectionId::Overview);
        state.select_section(SectionId::Monitoring);
        let snapshot = state.metric_snapshot().unwrap();
        assert_eq!(snapshot.get(presets::HEART_RATE), Some(72.0));
        assert_eq!(snapshot.get(presets::PROBIOTIC_COUNT), Some(1_250_000.0));
    }

    #[test]
    fn test_analysis_resets_after_duration() {
        let mut state = deck();
        state.handle_key(KeyCode::Char('4'));
        assert_eq!(state.current_section(), SectionId::AiEngine);

        state.handle_key(KeyCode::Enter);
        let processing = |state: &DashboardState| match state.view() {
            SectionView::AiEngine(view) => view.analysis.is_processing(),
            _ => false,
        };
        assert!(processing(&state));

        state.update(ms(2999));
        assert!(processing(&state));
        state.update(ms(1));
        assert!(!processing(&state));
        assert!(analysis_completed(&state));
    }

    #[test]
    fn test_second_run_while_processing_warns() {
        let mut state = deck();
        state.select_section(SectionId::AiEngine);
        state.handle_key(KeyCode::Enter);
        state.handle_key(KeyCode::Enter);
        state.update(Duration::ZERO);
        assert!(
            state
                .activity_logs
                .iter()
                .any(|event| event.event_type == EventType::Warning)
        );
        // Only one completion timer was scheduled
        assert_eq!(state.pending_timers(), 2);
    }

    #[test]
    fn test_analysis_cancelled_when_leaving_section() {
        let mut state = deck();
        state.select_section(SectionId::AiEngine);
        state.handle_key(KeyCode::Enter);
        state.handle_key(KeyCode::Right);
        assert_eq!(state.current_section(), SectionId::Monitoring);

        state.update(ms(5000));
        assert!(!analysis_completed(&state));
    }

    #[test]
    fn test_phase_player_keys() {
        let mut state = deck();
        state.handle_key(KeyCode::Char('2'));
        state.handle_key(KeyCode::Char(' '));
        state.update(ms(4000));
        let phase = |state: &DashboardState| match state.view() {
            SectionView::Technology(view) => view.player.phase(),
            _ => usize::MAX,
        };
        assert_eq!(phase(&state), 2);

        state.handle_key(KeyCode::Char('r'));
        assert_eq!(phase(&state), 0);
        assert_eq!(state.pending_timers(), 0);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = deck();
        state.handle_key(KeyCode::Left);
        assert_eq!(state.current_section(), SectionId::Team);
        state.handle_key(KeyCode::Tab);
        assert_eq!(state.current_section(), SectionId::Overview);
        state.handle_key(KeyCode::Char('9'));
        assert_eq!(state.current_section(), SectionId::Overview);
    }

    #[test]
    fn test_transition_settles() {
        let mut state = deck();
        state.select_section(SectionId::Market);
        assert!(state.transition().is_some());
        state.update(ms(250));
        assert!((state.transition_progress() - 0.5).abs() < 1e-9);
        state.update(ms(250));
        assert!(state.transition().is_none());
    }

    #[test]
    fn test_state_changes_reach_log_but_are_hidden() {
        let mut state = deck();
        state.select_section(SectionId::Team);
        state.update(Duration::ZERO);
        assert_eq!(state.activity_logs.len(), 1);
        assert!(!state.activity_logs[0].should_display());
        assert_eq!(state.activity_logs[0].section, Some(SectionId::Team));
    }

    #[test]
    fn test_shutdown_clears_all_timers() {
        let mut state = deck();
        state.select_section(SectionId::AiEngine);
        state.handle_key(KeyCode::Enter);
        assert_eq!(state.pending_timers(), 2);
        state.shutdown();
        assert_eq!(state.pending_timers(), 0);
    }

    #[test]
    fn test_invalid_config_is_rejected_up_front() {
        let config = Config {
            tick_interval_ms: 0,
            ..Config::default()
        };
        assert!(DashboardState::new(config, Box::new(RngDeltaSource::seeded(1))).is_err());
    }
}
