//! Live metric values

use super::source::DeltaSource;
use super::spec::JitterSpec;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One displayed number and how it jitters.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    /// Stable key, used by config overrides and JSON output.
    pub name: String,
    /// Human readable label.
    pub label: String,
    /// Suffix appended when displayed.
    pub unit: String,
    /// Decimal places when displayed.
    pub precision: usize,
    /// Displayed value is `value / scale` (1e6 shows counts in millions).
    pub scale: f64,
    value: f64,
    spec: JitterSpec,
}

impl Metric {
    /// The seed is clamped into the domain so a fresh metric is always valid.
    pub fn new(name: &str, label: &str, seed: f64, spec: JitterSpec) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            unit: String::new(),
            precision: 1,
            scale: 1.0,
            value: spec.clamp(seed),
            spec,
        }
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = unit.to_string();
        self
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn spec(&self) -> &JitterSpec {
        &self.spec
    }

    /// Replace both parameters, re-clamping the seed.
    pub fn reseed(&mut self, seed: f64, spec: JitterSpec) {
        self.spec = spec;
        self.value = spec.clamp(seed);
    }

    pub fn tick(&mut self, source: &mut dyn DeltaSource) {
        self.value = self.spec.step(self.value, source);
    }

    /// Position within the domain as 0..=1, for gauges. Open domains report 0.
    pub fn ratio(&self) -> f64 {
        let span = self.spec.hi() - self.spec.lo();
        if !span.is_finite() || span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.spec.lo()) / span).clamp(0.0, 1.0)
    }

    pub fn display_value(&self) -> String {
        format!(
            "{:.*}{}",
            self.precision,
            self.value / self.scale,
            self.unit
        )
    }
}

/// Ordered set of metrics owned by one mounted view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetricSnapshot {
    metrics: Vec<Metric>,
}

impl MetricSnapshot {
    pub fn new(metrics: Vec<Metric>) -> Self {
        Self { metrics }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.metric(name).map(Metric::value)
    }

    pub fn metric(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|metric| metric.name == name)
    }

    pub fn metric_mut(&mut self, name: &str) -> Option<&mut Metric> {
        self.metrics.iter_mut().find(|metric| metric.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// Apply one jitter step to every metric, in order.
    pub fn tick(&mut self, source: &mut dyn DeltaSource) {
        for metric in &mut self.metrics {
            metric.tick(source);
        }
    }
}

/// Serializes as a `{ name: value }` object in metric order.
impl Serialize for MetricSnapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.metrics.len()))?;
        for metric in &self.metrics {
            map.serialize_entry(&metric.name, &metric.value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jitter::source::{MockDeltaSource, RngDeltaSource};
    use crate::jitter::spec::MAX_DELTA_SPAN;
    use proptest::prelude::*;

    fn percentage(seed: f64, d: f64) -> Metric {
        Metric::new(
            "confidence",
            "Model Confidence",
            seed,
            JitterSpec::new(-d, d, 0.0, 100.0).unwrap(),
        )
    }

    #[test]
    fn test_one_tick_stays_within_delta() {
        let mut snapshot = MetricSnapshot::new(vec![percentage(50.0, 2.0)]);
        let mut source = RngDeltaSource::seeded(1);
        snapshot.tick(&mut source);

        let value = snapshot.get("confidence").unwrap();
        assert!((48.0..=52.0).contains(&value), "value {value}");
    }

    fn delta_bound() -> impl Strategy<Value = f64> {
        prop_oneof![-100.0f64..100.0, -1e308f64..1e308]
    }

    proptest! {
        /// A percentage metric never leaves [0, 100], however long it runs.
        #[test]
        fn prop_percentage_stays_in_domain(rng_seed in any::<u64>(), ticks in 0usize..2000) {
            let mut snapshot = MetricSnapshot::new(vec![percentage(50.0, 2.0)]);
            let mut source = RngDeltaSource::seeded(rng_seed);
            for _ in 0..ticks {
                snapshot.tick(&mut source);
                let value = snapshot.get("confidence").unwrap();
                prop_assert!((0.0..=100.0).contains(&value), "value {}", value);
            }
        }

        /// Any accepted parameters keep every tick inside [lo, hi]; only spans
        /// the sampler cannot handle are refused.
        #[test]
        fn prop_any_accepted_spec_stays_in_domain(
            rng_seed in any::<u64>(),
            a in delta_bound(),
            b in delta_bound(),
            lo in -1e6f64..1e6,
            width in 0.0f64..1e6,
            start in -1e7f64..1e7,
            ticks in 0usize..500,
        ) {
            let (min_delta, max_delta) = (a.min(b), a.max(b));
            let hi = lo + width;
            let spec = JitterSpec::new(min_delta, max_delta, lo, hi);
            prop_assert_eq!(spec.is_ok(), max_delta - min_delta <= MAX_DELTA_SPAN);

            if let Ok(spec) = spec {
                let mut metric = Metric::new("metric", "Metric", start, spec);
                let mut source = RngDeltaSource::seeded(rng_seed);
                for _ in 0..ticks {
                    metric.tick(&mut source);
                    prop_assert!(
                        metric.value() >= lo && metric.value() <= hi,
                        "value {} outside [{}, {}]",
                        metric.value(),
                        lo,
                        hi
                    );
                }
            }
        }
    }

    #[test]
    fn test_seed_outside_domain_is_clamped() {
        let metric = percentage(140.0, 2.0);
        assert_eq!(metric.value(), 100.0);
    }

    #[test]
    fn test_tick_applies_to_every_metric_in_order() {
        let mut snapshot = MetricSnapshot::new(vec![
            percentage(50.0, 2.0),
            Metric::new(
                "heart_rate",
                "Heart Rate",
                72.0,
                JitterSpec::new(-2.0, 2.0, 40.0, 180.0).unwrap(),
            ),
        ]);
        let mut source = MockDeltaSource::new();
        let mut seq = mockall::Sequence::new();
        source
            .expect_sample()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(1.5);
        source
            .expect_sample()
            .times(1)
            .in_sequence(&mut seq)
            .return_const(-2.0);

        snapshot.tick(&mut source);
        assert_eq!(snapshot.get("confidence"), Some(51.5));
        assert_eq!(snapshot.get("heart_rate"), Some(70.0));
    }

    #[test]
    fn test_display_and_ratio() {
        let count = Metric::new(
            "probiotic_count",
            "Probiotic Count",
            1_280_000.0,
            JitterSpec::new(-25_000.0, 25_000.0, 0.0, f64::INFINITY).unwrap(),
        )
        .with_scale(1_000_000.0)
        .with_unit("M");
        assert_eq!(count.display_value(), "1.3M");
        assert_eq!(count.ratio(), 0.0);

        let pct = percentage(25.0, 2.0).with_precision(0).with_unit("%");
        assert_eq!(pct.display_value(), "25%");
        assert!((pct.ratio() - 0.25).abs() < 1e-9);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let snapshot = MetricSnapshot::new(vec![percentage(50.0, 2.0)]);
        let json = serde_json::to_string(&snapshot).unwrap();
        assert_eq!(json, r#"{"confidence":50.0}"#);
    }
}
