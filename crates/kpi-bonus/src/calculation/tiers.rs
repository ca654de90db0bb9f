use super::aggregate::Aggregates;
use super::domain::{BonusOutcome, BonusTier, CalculationMethod, IndicatorOutcome, IndicatorTier};
use std::cmp::Ordering;

/// Scale applied to the grand total before the multiplier.
pub const BONUS_POINT_SCALE: f64 = 1000.0;

/// Bonus side of a calculation: the selected tier, its multiplier and the payout.
#[derive(Debug, Clone, PartialEq)]
pub struct BonusDecision {
    pub outcome: BonusOutcome,
    pub active_multiplier: f64,
    pub final_bonus: f64,
}

impl BonusDecision {
    fn none() -> Self {
        Self {
            outcome: BonusOutcome::NotAvailable,
            active_multiplier: 0.0,
            final_bonus: 0.0,
        }
    }
}

/// Highest-threshold item not exceeding `value`; equal thresholds keep input order.
fn highest_qualifying<T>(items: &[T], value: f64, threshold: impl Fn(&T) -> f64) -> Option<&T> {
    let mut ordered: Vec<&T> = items.iter().collect();
    ordered.sort_by(|a, b| {
        threshold(*b)
            .partial_cmp(&threshold(*a))
            .unwrap_or(Ordering::Equal)
    });
    ordered.into_iter().find(|item| threshold(*item) <= value)
}

pub fn select_indicator(tiers: &[IndicatorTier], grand_total_points: f64) -> IndicatorOutcome {
    match highest_qualifying(tiers, grand_total_points, |tier| tier.threshold) {
        Some(tier) => IndicatorOutcome::Matched(tier.clone()),
        None => IndicatorOutcome::NotAvailable,
    }
}

pub fn select_bonus_tier(tiers: &[BonusTier], source_value: f64) -> BonusOutcome {
    match highest_qualifying(tiers, source_value, |tier| tier.threshold) {
        Some(tier) => BonusOutcome::Matched(tier.clone()),
        None => BonusOutcome::NotAvailable,
    }
}

/// Value compared against bonus thresholds, or `None` when no bonus applies.
pub fn bonus_source_value(method: CalculationMethod, totals: &Aggregates) -> Option<f64> {
    match method {
        CalculationMethod::NonSales => None,
        CalculationMethod::PointsBased => Some(totals.grand_total_points),
        CalculationMethod::OmsetBased => Some(totals.total_omset_realized),
    }
}

pub fn decide_bonus(
    tiers: &[BonusTier],
    method: CalculationMethod,
    totals: &Aggregates,
) -> BonusDecision {
    let Some(source_value) = bonus_source_value(method, totals) else {
        return BonusDecision::none();
    };

    let outcome = select_bonus_tier(tiers, source_value);
    let active_multiplier = outcome.tier().map(|tier| tier.multiplier).unwrap_or(0.0);
    let final_bonus = (totals.grand_total_points * BONUS_POINT_SCALE) * active_multiplier;

    BonusDecision {
        outcome,
        active_multiplier,
        final_bonus,
    }
}
