//! Per-section state
//!
//! A view is mounted when its section becomes active and torn down when the
//! router leaves it. Mounting seeds fresh state and starts the view's live
//! timers; teardown cancels every timer the view owns.

pub mod ai_engine;
pub mod monitoring;
pub mod presets;
pub mod tech_demo;

pub use ai_engine::AiEngineView;
pub use monitoring::MonitoringView;
pub use tech_demo::TechDemoView;

use crate::config::{Config, ConfigError};
use crate::content::{Dataset, MarketMetric};
use crate::events::{Event, Source};
use crate::jitter::{DeltaSource, MetricSnapshot};
use crate::router::{SectionId, Selector};
use crate::scheduler::{Scheduler, SchedulerError, TimerId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[derive(Debug)]
pub enum SectionView {
    /// Overview, team, and the fallback for a section that failed to mount.
    Static(SectionId),
    Technology(TechDemoView),
    ClinicalData(Selector<Dataset>),
    AiEngine(AiEngineView),
    Monitoring(MonitoringView),
    Market(Selector<MarketMetric>),
}

impl SectionView {
    /// Build the view for `id` and start its live timers.
    pub fn mount(
        id: SectionId,
        scheduler: &mut Scheduler,
        config: &Config,
    ) -> Result<Self, ViewError> {
        let view = match id {
            SectionId::Overview | SectionId::Team => SectionView::Static(id),
            SectionId::Technology => {
                SectionView::Technology(TechDemoView::new(config.phase_interval()))
            }
            SectionId::ClinicalData => SectionView::ClinicalData(Selector::new()),
            SectionId::AiEngine => {
                let mut view = AiEngineView::new(config)?;
                view.live.start(scheduler)?;
                SectionView::AiEngine(view)
            }
            SectionId::Monitoring => {
                let mut view = MonitoringView::new(config)?;
                view.vitals.start(scheduler)?;
                SectionView::Monitoring(view)
            }
            SectionId::Market => SectionView::Market(Selector::new()),
        };
        Ok(view)
    }

    pub fn id(&self) -> SectionId {
        match self {
            SectionView::Static(id) => *id,
            SectionView::Technology(_) => SectionId::Technology,
            SectionView::ClinicalData(_) => SectionId::ClinicalData,
            SectionView::AiEngine(_) => SectionId::AiEngine,
            SectionView::Monitoring(_) => SectionId::Monitoring,
            SectionView::Market(_) => SectionId::Market,
        }
    }

    /// Cancel every timer this view owns.
    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        match self {
            SectionView::Technology(view) => view.teardown(scheduler),
            SectionView::AiEngine(view) => view.teardown(scheduler),
            SectionView::Monitoring(view) => view.teardown(scheduler),
            SectionView::Static(_) | SectionView::ClinicalData(_) | SectionView::Market(_) => {}
        }
    }

    /// Route a fired timer to whatever part of the view owns it.
    pub fn on_timer(&mut self, id: TimerId, source: &mut dyn DeltaSource) -> Option<Event> {
        match self {
            SectionView::AiEngine(view) => {
                if view.analysis.on_timer(id) {
                    return Some(Event::success(
                        Source::Analysis,
                        format!(
                            "Live analysis complete ({:.1}% confidence)",
                            view.confidence()
                        ),
                    ));
                }
                view.live.on_timer(id, source);
                None
            }
            SectionView::Monitoring(view) => {
                view.vitals.on_timer(id, source);
                None
            }
            SectionView::Technology(view) => {
                view.player.on_timer(id);
                None
            }
            SectionView::Static(_) | SectionView::ClinicalData(_) | SectionView::Market(_) => None,
        }
    }

    /// Live metrics of this view, if it has any.
    pub fn metric_snapshot(&self) -> Option<&MetricSnapshot> {
        match self {
            SectionView::AiEngine(view) => Some(view.live.snapshot()),
            SectionView::Monitoring(view) => Some(view.vitals.snapshot()),
            _ => None,
        }
    }

    /// Advance the sub-tab. Returns the new tab's title, or None when the
    /// section has no tabs.
    pub fn next_tab(&mut self) -> Option<&'static str> {
        match self {
            SectionView::Technology(view) => Some(view.tab.next().title()),
            SectionView::ClinicalData(tab) => Some(tab.next().title()),
            SectionView::AiEngine(view) => Some(view.tab.next().title()),
            SectionView::Market(tab) => Some(tab.next().figure().title),
            SectionView::Static(_) | SectionView::Monitoring(_) => None,
        }
    }

    pub fn previous_tab(&mut self) -> Option<&'static str> {
        match self {
            SectionView::Technology(view) => Some(view.tab.previous().title()),
            SectionView::ClinicalData(tab) => Some(tab.previous().title()),
            SectionView::AiEngine(view) => Some(view.tab.previous().title()),
            SectionView::Market(tab) => Some(tab.previous().figure().title),
            SectionView::Static(_) | SectionView::Monitoring(_) => None,
        }
    }

    /// Play or pause the phase player. None outside the technology section.
    pub fn toggle_play(
        &mut self,
        scheduler: &mut Scheduler,
    ) -> Option<Result<bool, SchedulerError>> {
        match self {
            SectionView::Technology(view) => Some(view.player.toggle(scheduler)),
            _ => None,
        }
    }

    pub fn reset_player(&mut self, scheduler: &mut Scheduler) -> bool {
        match self {
            SectionView::Technology(view) => {
                view.player.reset(scheduler);
                true
            }
            _ => false,
        }
    }

    /// Start a live analysis. False outside the AI engine section or while
    /// one is already processing.
    pub fn run_analysis(&mut self, scheduler: &mut Scheduler) -> bool {
        match self {
            SectionView::AiEngine(view) => view.analysis.run(scheduler),
            _ => false,
        }
    }
}
