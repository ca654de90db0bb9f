use crate::calculation::domain::{
    BonusTier, Direction, IndicatorTier, KpiDefinition, KpiId, PointCapping, SpecialCalc,
};

pub(super) const TOLERANCE: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    let scale = expected.abs().max(1.0);
    assert!(
        (actual - expected).abs() <= TOLERANCE * scale,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn plain_kpi(id: u64, name: &str, weight: f64, target: f64) -> KpiDefinition {
    KpiDefinition {
        id: KpiId(id),
        platform: "Administrasi".to_string(),
        name: name.to_string(),
        weight,
        target,
        min_target: None,
        direction: Direction::HigherIsBetter,
        is_currency: false,
        is_percentage: false,
        special_calc: None,
        point_capping: PointCapping::Uncapped,
    }
}

pub(super) fn currency_kpi(
    id: u64,
    platform: &str,
    name: &str,
    weight: f64,
    target: f64,
) -> KpiDefinition {
    KpiDefinition {
        platform: platform.to_string(),
        is_currency: true,
        ..plain_kpi(id, name, weight, target)
    }
}

pub(super) fn roas_kpi(id: u64, platform: &str, target: f64, min_target: f64) -> KpiDefinition {
    KpiDefinition {
        platform: platform.to_string(),
        min_target: Some(min_target),
        special_calc: Some(SpecialCalc::Roas),
        ..plain_kpi(id, &format!("ROAS {platform}"), 15.0, target)
    }
}

/// ROAS, omset and ad-cost KPIs of one marketplace platform (ids 1, 2, 3).
pub(super) fn shopee_kpis() -> Vec<KpiDefinition> {
    vec![
        roas_kpi(1, "Shopee", 12.0, 10.0),
        currency_kpi(2, "Shopee", "Realisasi Omset Shopee", 10.0, 250_000_000.0),
        KpiDefinition {
            direction: Direction::LowerIsBetter,
            ..currency_kpi(3, "Shopee", "Efisiensi Biaya Iklan Shopee", 5.0, 25_000_000.0)
        },
    ]
}

pub(super) fn omset_bonus_tiers() -> Vec<BonusTier> {
    vec![
        BonusTier {
            id: 1,
            name: "Bad Perform 1".to_string(),
            threshold: 500_000_000.0,
            multiplier: 8.0,
        },
        BonusTier {
            id: 2,
            name: "Average 1".to_string(),
            threshold: 975_000_000.0,
            multiplier: 13.0,
        },
    ]
}

pub(super) fn indicator_tiers() -> Vec<IndicatorTier> {
    [
        (1, "Bad Perform", -25.0, "bg-red-600"),
        (2, "Under Perform", 40.0, "bg-pink-500"),
        (3, "Average", 60.0, "bg-yellow-500"),
        (4, "Good", 80.0, "bg-blue-500"),
        (5, "Excellent", 100.0, "bg-green-500"),
    ]
    .into_iter()
    .map(|(id, name, threshold, color)| IndicatorTier {
        id,
        name: name.to_string(),
        threshold,
        color: color.to_string(),
    })
    .collect()
}
