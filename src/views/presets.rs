//! Seed values and jitter parameters of the live metrics

use crate::config::{Config, ConfigError};
use crate::jitter::{JitterSpec, Metric, MetricSnapshot};

pub struct MetricPreset {
    pub name: &'static str,
    pub label: &'static str,
    pub seed: f64,
    pub min_delta: f64,
    pub max_delta: f64,
    pub lo: f64,
    pub hi: f64,
    pub unit: &'static str,
    pub precision: usize,
    pub scale: f64,
}

pub const CONFIDENCE: &str = "confidence";
pub const HEART_RATE: &str = "heart_rate";
pub const TEMPERATURE: &str = "temperature";
pub const TUMOR_SIZE: &str = "tumor_size";
pub const PROBIOTIC_COUNT: &str = "probiotic_count";
pub const IMMUNE_RESPONSE: &str = "immune_response";

pub const AI_ENGINE: [MetricPreset; 1] = [MetricPreset {
    name: CONFIDENCE,
    label: "Model Confidence",
    seed: 50.0,
    min_delta: -10.0,
    max_delta: 10.0,
    lo: 0.0,
    hi: 100.0,
    unit: "%",
    precision: 1,
    scale: 1.0,
}];

pub const MONITORING: [MetricPreset; 5] = [
    MetricPreset {
        name: HEART_RATE,
        label: "Heart Rate",
        seed: 72.0,
        min_delta: -2.0,
        max_delta: 2.0,
        lo: 40.0,
        hi: 180.0,
        unit: " BPM",
        precision: 0,
        scale: 1.0,
    },
    MetricPreset {
        name: TEMPERATURE,
        label: "Body Temperature",
        seed: 98.6,
        min_delta: -0.1,
        max_delta: 0.1,
        lo: 95.0,
        hi: 105.0,
        unit: "°F",
        precision: 1,
        scale: 1.0,
    },
    // Only shrinks, never below 0.1 cm
    MetricPreset {
        name: TUMOR_SIZE,
        label: "Tumor Size",
        seed: 2.3,
        min_delta: -0.05,
        max_delta: 0.0,
        lo: 0.1,
        hi: f64::INFINITY,
        unit: " cm",
        precision: 1,
        scale: 1.0,
    },
    MetricPreset {
        name: PROBIOTIC_COUNT,
        label: "Probiotic Count",
        seed: 1_250_000.0,
        min_delta: -25_000.0,
        max_delta: 25_000.0,
        lo: 0.0,
        hi: f64::INFINITY,
        unit: "M",
        precision: 1,
        scale: 1_000_000.0,
    },
    // Only grows, capped at 100%
    MetricPreset {
        name: IMMUNE_RESPONSE,
        label: "Immune Response",
        seed: 85.0,
        min_delta: 0.0,
        max_delta: 2.0,
        lo: 0.0,
        hi: 100.0,
        unit: "%",
        precision: 0,
        scale: 1.0,
    },
];

/// Build a freshly seeded snapshot and apply the config's overrides to it.
pub fn build_snapshot(
    presets: &[MetricPreset],
    config: &Config,
) -> Result<MetricSnapshot, ConfigError> {
    let metrics = presets
        .iter()
        .map(|preset| {
            let spec = JitterSpec::new(preset.min_delta, preset.max_delta, preset.lo, preset.hi)
                .map_err(|source| ConfigError::InvalidMetric {
                    name: preset.name.to_string(),
                    source,
                })?;
            Ok(Metric::new(preset.name, preset.label, preset.seed, spec)
                .with_unit(preset.unit)
                .with_precision(preset.precision)
                .with_scale(preset.scale))
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    let mut snapshot = MetricSnapshot::new(metrics);
    config.apply_overrides(&mut snapshot)?;
    Ok(snapshot)
}
