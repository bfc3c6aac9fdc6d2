//! Real-time patient monitoring

use super::presets::{self, build_snapshot};
use crate::config::{Config, ConfigError};
use crate::jitter::LiveMetrics;
use crate::scheduler::Scheduler;

#[derive(Debug)]
pub struct MonitoringView {
    pub vitals: LiveMetrics,
}

impl MonitoringView {
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        let snapshot = build_snapshot(&presets::MONITORING, config)?;
        Ok(Self {
            vitals: LiveMetrics::new(snapshot, config.tick_interval()),
        })
    }

    pub fn teardown(&mut self, scheduler: &mut Scheduler) {
        self.vitals.stop(scheduler);
    }
}
