use super::domain::{Direction, KpiDefinition, KpiResultDetail, PointCapping, RealizationInput};
use super::roas::RoasValues;

/// Realized value for a KPI: derived for ROAS KPIs, parsed input otherwise.
pub fn realized_value(
    kpi: &KpiDefinition,
    realizations: &RealizationInput,
    roas_values: &RoasValues,
) -> f64 {
    if kpi.is_roas() {
        return roas_values.get(kpi.id).unwrap_or(0.0);
    }

    if kpi.is_currency {
        realizations.currency(kpi.id)
    } else {
        realizations.number(kpi.id)
    }
}

/// Achievement ratio of `realized` against the KPI target.
///
/// Non-positive targets or realizations earn nothing in either direction, and a
/// ROAS KPI below its minimum target earns nothing regardless of the ratio.
pub fn achievement_ratio(kpi: &KpiDefinition, realized: f64) -> f64 {
    let target = kpi.target;
    if target <= 0.0 || realized <= 0.0 {
        return 0.0;
    }

    if kpi.is_roas() {
        if let Some(min_target) = kpi.min_target {
            if realized < min_target {
                return 0.0;
            }
        }
    }

    match kpi.direction {
        Direction::HigherIsBetter => realized / target,
        Direction::LowerIsBetter => target / realized,
    }
}

/// Scores one KPI into its detail record.
pub fn score_kpi(kpi: &KpiDefinition, realized: f64) -> KpiResultDetail {
    let ratio = achievement_ratio(kpi, realized);

    let mut points = ratio * kpi.weight;
    if kpi.point_capping == PointCapping::Capped && points > kpi.weight {
        points = kpi.weight;
    }

    KpiResultDetail {
        id: kpi.id,
        score: ratio * 100.0,
        points,
        realized_value: realized,
    }
}

/// Scores every KPI in input order, one detail per KPI.
pub fn score_all(
    kpis: &[KpiDefinition],
    realizations: &RealizationInput,
    roas_values: &RoasValues,
) -> Vec<KpiResultDetail> {
    kpis.iter()
        .map(|kpi| score_kpi(kpi, realized_value(kpi, realizations, roas_values)))
        .collect()
}
