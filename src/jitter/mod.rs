//! Bounded random jitter for live dashboard numbers

pub mod analysis;
pub mod snapshot;
pub mod source;
pub mod spec;
pub mod ticker;

pub use analysis::{AnalysisRun, AnalysisState};
pub use snapshot::{Metric, MetricSnapshot};
pub use source::{DeltaSource, RngDeltaSource};
pub use spec::{JitterError, JitterSpec};
pub use ticker::{JitterLoop, LiveMetrics, LoopState};
