//! AI engine: model tabs, live confidence and the analysis run

use super::presets::{self, build_snapshot};
use crate::config::{Config, ConfigError};
use crate::content::AiModel;
use crate::jitter::{AnalysisRun, LiveMetrics};
use crate::router::Selector;
use crate::scheduler::Scheduler;

#[derive(Debug)]
pub struct AiEngineView {
    pub tab: Selector<AiModel>,
    pub live: LiveMetrics,
    pub analysis: AnalysisRun,
}

impl AiEngineView {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let snapshot = build_snapshot(&presets::AI_ENGINE, config)?;
        Ok(Self {
            tab: Selector::new(),
            live: LiveMetrics::new(snapshot, config.tick_interval()),
            analysis: AnalysisRun::new(config.analysis_duration()),
        })
    }

    pub fn confidence(&self) -> f64 {
        self.live
            .snapshot()
            .get(presets::CONFIDENCE)
            .unwrap_or_default()
    }

    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        self.live.stop(scheduler);
        self.analysis.cancel(scheduler);
    }
}
