use chrono::{Datelike, Local, NaiveDate};
use kpi_bonus::calculation::KpiId;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Parses a reporting period given as `YYYY-MM` into the first day of that month.
pub(crate) fn parse_period(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", raw.trim()), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM ({err})"))
}

pub(crate) fn current_period() -> NaiveDate {
    let today = Local::now().date_naive();
    today.with_day(1).unwrap_or(today)
}

pub(crate) fn period_label(period: NaiveDate) -> String {
    period.format("%B %Y").to_string()
}

/// Parses one `ID=VALUE` realization override; the value is kept verbatim.
pub(crate) fn parse_realization_pair(raw: &str) -> Result<(KpiId, String), String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected ID=VALUE, got '{raw}'"))?;
    let id = id
        .trim()
        .parse::<u64>()
        .map_err(|err| format!("invalid KPI id in '{raw}' ({err})"))?;
    Ok((KpiId(id), value.trim().to_string()))
}
