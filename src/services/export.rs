use serde::Serialize;

use crate::models::{date_range::DateInterval, error::AppError, metrics::DailyMetric};

#[derive(Serialize)]
struct MetricsExport<'a> {
    from: Option<String>,
    to: Option<String>,
    days: &'a [DailyMetric],
}

/// Serializes the metrics shown for `interval` as pretty-printed JSON.
pub fn metrics_to_json(interval: &DateInterval, days: &[DailyMetric]) -> Result<String, AppError> {
    if days.is_empty() {
        return Err(AppError::Export("Select a date range to export".to_string()));
    }

    let export = MetricsExport {
        from: interval.from().map(|d| d.date().to_string()),
        to: interval.to().map(|d| d.date().to_string()),
        days,
    };

    serde_json::to_string_pretty(&export).map_err(|e| AppError::Export(e.to_string()))
}
