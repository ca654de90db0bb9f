//! KPI achievement scoring and bonus calculation.
//!
//! A calculation is one pure pass over caller-owned inputs: realizations are
//! parsed, ROAS values are derived per platform, every KPI is scored, the scores
//! are aggregated and finally mapped onto the indicator and bonus tiers. Nothing
//! in this module fails; malformed input degrades to zero or to a sentinel tier.

pub mod aggregate;
pub mod cost;
pub mod domain;
pub mod parsing;
pub mod roas;
pub mod router;
pub mod scoring;
pub mod tiers;

#[cfg(test)]
mod tests;

pub use aggregate::Aggregates;
pub use cost::{CostClassifier, DEFAULT_COST_KEYWORDS};
pub use domain::{
    BonusOutcome, BonusTier, CalculationMethod, CalculationRequest, CalculationResult, Direction,
    IndicatorOutcome, IndicatorTier, KpiDefinition, KpiId, KpiResultDetail, PointCapping,
    RealizationInput, RealizationValue, SpecialCalc, NEUTRAL_INDICATOR_COLOR, NOT_AVAILABLE_LABEL,
};
pub use parsing::{parse_currency, parse_localized_number};
pub use router::calculation_router;
pub use tiers::BONUS_POINT_SCALE;

/// Runs one full calculation pass.
///
/// `cost_keywords` overrides the default cost keywords when it is a non-empty
/// list. The result holds exactly one detail per KPI, in input order.
pub fn calculate(
    kpis: &[KpiDefinition],
    bonus_tiers: &[BonusTier],
    indicator_tiers: &[IndicatorTier],
    realizations: &RealizationInput,
    method: CalculationMethod,
    cost_keywords: Option<&[String]>,
) -> CalculationResult {
    let classifier = CostClassifier::new(cost_keywords);

    let roas_values = roas::resolve(kpis, realizations, &classifier);
    let details = scoring::score_all(kpis, realizations, &roas_values);
    let totals = aggregate::aggregate(kpis, &details, &classifier);

    let kpi_indicator = tiers::select_indicator(indicator_tiers, totals.grand_total_points);
    let bonus = tiers::decide_bonus(bonus_tiers, method, &totals);

    CalculationResult {
        grand_total_points: totals.grand_total_points,
        final_bonus: bonus.final_bonus,
        active_multiplier: bonus.active_multiplier,
        kpi_indicator,
        omset_indicator: bonus.outcome,
        total_omset_realized: totals.total_omset_realized,
        total_omset_target: totals.total_omset_target,
        details,
    }
}

impl CalculationRequest {
    pub fn calculate(&self) -> CalculationResult {
        calculate(
            &self.kpi_configs,
            &self.bonus_schemes,
            &self.kpi_indicators,
            &self.realizations,
            self.bonus_calculation_method,
            Some(self.custom_cost_keywords.as_slice()),
        )
    }
}
