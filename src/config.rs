//! Application configuration.

use crate::consts::deck_consts::{self, timing};
use crate::jitter::{JitterError, JitterSpec, MetricSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;
use std::{fs, path::Path, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Invalid override for metric '{name}': {source}")]
    InvalidMetric { name: String, source: JitterError },
}

/// Partial replacement for a metric's seed and jitter parameters.
/// Missing fields keep the built-in value.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct MetricOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_delta: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lo: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hi: Option<f64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub tick_interval_ms: u64,
    pub analysis_duration_ms: u64,
    pub phase_interval_ms: u64,
    pub transition_ms: u64,
    pub splash_duration_ms: u64,
    pub with_background_color: bool,
    /// Section shown after the splash screen. Unknown ids fall back to the first section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_section: Option<String>,
    /// Overrides keyed by metric name, e.g. `heart_rate`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub metrics: BTreeMap<String, MetricOverride>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_ms: timing::TICK_INTERVAL_MS,
            analysis_duration_ms: timing::ANALYSIS_DURATION_MS,
            phase_interval_ms: timing::PHASE_INTERVAL_MS,
            transition_ms: timing::TRANSITION_MS,
            splash_duration_ms: timing::SPLASH_DURATION_MS,
            with_background_color: false,
            initial_section: None,
            metrics: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file at the given path.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let buf = fs::read(path)?;
        let config: Config = serde_json::from_slice(&buf)?;
        Ok(config)
    }

    /// Loads the file if it exists, defaults otherwise.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to a JSON file at the given path.
    ///
    /// Directories will be created if they don't exist. This method overwrites existing files.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Deletes the config file. A missing file is not an error.
    pub fn clear(path: &Path) -> Result<(), ConfigError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn analysis_duration(&self) -> Duration {
        Duration::from_millis(self.analysis_duration_ms)
    }

    pub fn phase_interval(&self) -> Duration {
        Duration::from_millis(self.phase_interval_ms)
    }

    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    /// Apply metric overrides to a freshly seeded snapshot. Overrides naming
    /// metrics that are not in `snapshot` belong to another view and are skipped.
    pub fn apply_overrides(&self, snapshot: &mut MetricSnapshot) -> Result<(), ConfigError> {
        for (name, over) in &self.metrics {
            let Some(metric) = snapshot.metric_mut(name) else {
                continue;
            };
            let base = *metric.spec();
            let spec = JitterSpec::new(
                over.min_delta.unwrap_or(base.min_delta()),
                over.max_delta.unwrap_or(base.max_delta()),
                over.lo.unwrap_or(base.lo()),
                over.hi.unwrap_or(base.hi()),
            )
            .map_err(|source| ConfigError::InvalidMetric {
                name: name.clone(),
                source,
            })?;
            let seed = over.seed.unwrap_or(metric.value());
            metric.reseed(seed, spec);
        }
        Ok(())
    }
}

/// `$HOME/.tumortarget/config.json`
pub fn get_config_path() -> Result<PathBuf, ConfigError> {
    let home = home::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home
        .join(deck_consts::CONFIG_DIR)
        .join(deck_consts::CONFIG_FILE))
}
