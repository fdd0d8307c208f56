//! Derived statistics for the dashboard views.
//!
//! Everything here is plain data-in/data-out so the views can be tested
//! without a terminal or a graphics backend: summary means, per-category
//! means, histogram/density data for the distribution chart, the Pearson
//! correlation matrix, and the heuristic severity estimator.

pub mod correlate;
pub mod distribution;
pub mod estimate;
pub mod groups;
pub mod metrics;

pub use correlate::{CorrelationMatrix, correlation_matrix, pearson};
pub use distribution::{DensityCurve, Histogram, gaussian_kde, histogram};
pub use estimate::ScenarioInput;
pub use groups::{GroupMean, mean_by_category, severity_by_gender};
pub use metrics::{Metric, mean, summary_metrics};
