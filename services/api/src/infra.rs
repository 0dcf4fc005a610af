use chrono::NaiveDate;
use metrics_exporter_prometheus::PrometheusHandle;
use openness::assessment::ScoringPipeline;
use openness::config::ScoringConfig;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Reference data and default thresholds shared by every scoring request.
#[derive(Debug, Clone)]
pub(crate) struct ScoringState {
    pub(crate) pipeline: ScoringPipeline,
    pub(crate) defaults: ScoringConfig,
}

impl ScoringState {
    pub(crate) fn new(defaults: ScoringConfig) -> Self {
        Self {
            pipeline: ScoringPipeline::standard(),
            defaults,
        }
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
