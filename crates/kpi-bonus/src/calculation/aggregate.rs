use super::cost::CostClassifier;
use super::domain::{KpiDefinition, KpiResultDetail};

/// Division-wide totals derived from the per-KPI details.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Aggregates {
    pub grand_total_points: f64,
    pub total_omset_realized: f64,
    pub total_omset_target: f64,
}

/// Whether a KPI contributes to the automatic omset totals.
pub fn counts_toward_omset(kpi: &KpiDefinition, classifier: &CostClassifier) -> bool {
    kpi.is_currency && !classifier.is_cost_kpi(&kpi.name)
}

/// `details` must be the scorer output for `kpis`, in the same order.
pub fn aggregate(
    kpis: &[KpiDefinition],
    details: &[KpiResultDetail],
    classifier: &CostClassifier,
) -> Aggregates {
    let mut totals = Aggregates::default();

    for (kpi, detail) in kpis.iter().zip(details) {
        totals.grand_total_points += detail.points;
        if counts_toward_omset(kpi, classifier) {
            totals.total_omset_realized += detail.realized_value;
            totals.total_omset_target += kpi.target;
        }
    }

    totals
}
