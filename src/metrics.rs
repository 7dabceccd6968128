//! Prometheus metrics for score submissions.
//!
//! Recording calls are no-ops until [`install_recorder`] has run, so the
//! store and handlers can be exercised in tests without a global recorder.

use metrics::{counter, describe_counter, describe_gauge, gauge};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use tracing::debug;

use crate::error::Result;

// === Metric Name Constants ===

/// Submissions received counter metric name.
pub const METRIC_SUBMISSIONS: &str = "score_submissions_total";
/// Submissions rejected counter metric name.
pub const METRIC_SUBMISSIONS_REJECTED: &str = "score_submissions_rejected_total";
/// New records counter metric name.
pub const METRIC_HIGH_SCORE_UPDATES: &str = "high_score_updates_total";
/// Current high score gauge metric name.
pub const METRIC_HIGH_SCORE: &str = "high_score";

/// Install the global Prometheus recorder and describe all metrics.
pub fn install_recorder() -> Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    init_metrics();
    Ok(handle)
}

/// Initialize all metric descriptions.
pub fn init_metrics() {
    describe_counter!(METRIC_SUBMISSIONS, "Total number of scores submitted");
    describe_counter!(
        METRIC_SUBMISSIONS_REJECTED,
        "Total number of submitted scores rejected as invalid"
    );
    describe_counter!(
        METRIC_HIGH_SCORE_UPDATES,
        "Total number of submissions that set a new high score"
    );
    describe_gauge!(METRIC_HIGH_SCORE, "Current high score");

    debug!("Metrics initialized");
}

/// Increment submissions counter.
pub fn inc_submissions() {
    counter!(METRIC_SUBMISSIONS).increment(1);
}

/// Increment rejected submissions counter.
pub fn inc_submissions_rejected() {
    counter!(METRIC_SUBMISSIONS_REJECTED).increment(1);
}

/// Record a new high score.
///
/// The gauge is set after the store update, so two records landing at the
/// same time may briefly leave it behind the stored value. Callers pass the
/// freshly loaded store value to keep that window small.
pub fn record_high_score(value: u64) {
    counter!(METRIC_HIGH_SCORE_UPDATES).increment(1);
    gauge!(METRIC_HIGH_SCORE).set(value as f64);
}
