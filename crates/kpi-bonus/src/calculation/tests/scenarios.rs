use super::common::*;
use crate::calculation::domain::{
    BonusOutcome, CalculationMethod, IndicatorOutcome, KpiId, RealizationInput,
};
use crate::calculation::{calculate, CalculationRequest};

#[test]
fn currency_kpi_over_target_scores_above_hundred() {
    let kpis = vec![currency_kpi(
        1,
        "Shopee",
        "Realisasi Omset Shopee",
        10.0,
        250_000_000.0,
    )];
    let inputs = RealizationInput::new().with(1, "300.000.000");

    let result = calculate(
        &kpis,
        &[],
        &[],
        &inputs,
        CalculationMethod::OmsetBased,
        None,
    );

    let detail = result.detail(KpiId(1)).expect("detail present");
    assert_close(detail.realized_value, 300_000_000.0);
    assert_close(detail.score, 120.0);
    assert_close(detail.points, 12.0);
    assert_close(result.total_omset_realized, 300_000_000.0);
    assert_close(result.total_omset_target, 250_000_000.0);
}

#[test]
fn derived_roas_above_floor_scores_normally() {
    let inputs = RealizationInput::new()
        .with(1, "999")
        .with(2, "120.000.000")
        .with(3, "10.000.000");

    let result = calculate(
        &shopee_kpis(),
        &omset_bonus_tiers(),
        &indicator_tiers(),
        &inputs,
        CalculationMethod::OmsetBased,
        None,
    );

    let roas = result.detail(KpiId(1)).expect("roas detail");
    assert_close(roas.realized_value, 12.0);
    assert_close(roas.score, 100.0);
    assert_close(roas.points, 15.0);

    let cost = result.detail(KpiId(3)).expect("cost detail");
    assert_close(cost.score, 250.0);
    assert_close(cost.points, 12.5);

    // the ROAS KPI is not currency and the cost KPI is excluded
    assert_close(result.total_omset_realized, 120_000_000.0);
    assert_close(result.total_omset_target, 250_000_000.0);
    assert_close(result.grand_total_points, 15.0 + 4.8 + 12.5);
    assert_eq!(result.kpi_indicator.name(), "Bad Perform");
}

#[test]
fn derived_roas_below_floor_earns_no_points() {
    let inputs = RealizationInput::new()
        .with(2, "80.000.000")
        .with(3, "10.000.000");

    let result = calculate(
        &shopee_kpis(),
        &[],
        &[],
        &inputs,
        CalculationMethod::OmsetBased,
        None,
    );

    let roas = result.detail(KpiId(1)).expect("roas detail");
    assert_close(roas.realized_value, 8.0);
    assert_eq!(roas.points, 0.0);
    assert_eq!(roas.score, 0.0);
}

#[test]
fn zero_ad_cost_derives_zero_roas() {
    let inputs = RealizationInput::new()
        .with(2, "50.000.000")
        .with(3, "0");

    let result = calculate(
        &shopee_kpis(),
        &[],
        &[],
        &inputs,
        CalculationMethod::OmsetBased,
        None,
    );

    let roas = result.detail(KpiId(1)).expect("roas detail");
    assert_eq!(roas.realized_value, 0.0);
    assert_eq!(roas.points, 0.0);
    assert!(result.grand_total_points.is_finite());
}

#[test]
fn non_sales_reports_points_and_indicator_without_bonus() {
    let kpis = vec![plain_kpi(30, "Akurasi Data Entry (%)", 87.5, 1.0)];
    let inputs = RealizationInput::new().with(30, "1");

    let result = calculate(
        &kpis,
        &omset_bonus_tiers(),
        &indicator_tiers(),
        &inputs,
        CalculationMethod::NonSales,
        None,
    );

    assert_close(result.grand_total_points, 87.5);
    assert_eq!(result.final_bonus, 0.0);
    assert_eq!(result.active_multiplier, 0.0);
    assert_eq!(result.omset_indicator, BonusOutcome::NotAvailable);
    match &result.kpi_indicator {
        IndicatorOutcome::Matched(tier) => assert_eq!(tier.name, "Good"),
        other => panic!("expected a matched indicator, got {other:?}"),
    }
    assert_eq!(result.details.len(), 1);
}

#[test]
fn omset_based_selects_highest_tier_not_exceeding_omset() {
    let kpis = vec![currency_kpi(1, "Tim", "Total Omset Tim", 10.0, 600_000_000.0)];
    let inputs = RealizationInput::new().with(1, "600.000.000");

    let result = calculate(
        &kpis,
        &omset_bonus_tiers(),
        &indicator_tiers(),
        &inputs,
        CalculationMethod::OmsetBased,
        None,
    );

    assert_eq!(result.active_multiplier, 8.0);
    assert_eq!(result.omset_indicator.name(), "Bad Perform 1");
    assert_close(result.final_bonus, 10.0 * 1000.0 * 8.0);
}

#[test]
fn custom_cost_keywords_change_omset_exclusion() {
    let kpis = vec![
        currency_kpi(1, "Tim", "Omset Tim", 50.0, 100.0),
        currency_kpi(2, "Tim", "Pengeluaran Tim", 50.0, 100.0),
    ];
    let inputs = RealizationInput::new().with(1, "100").with(2, "40");

    let defaults = calculate(
        &kpis,
        &[],
        &[],
        &inputs,
        CalculationMethod::OmsetBased,
        None,
    );
    assert_close(defaults.total_omset_realized, 140.0);

    let custom = vec!["pengeluaran".to_string()];
    let overridden = calculate(
        &kpis,
        &[],
        &[],
        &inputs,
        CalculationMethod::OmsetBased,
        Some(&custom),
    );
    assert_close(overridden.total_omset_realized, 100.0);
    assert_close(overridden.total_omset_target, 100.0);
}

#[test]
fn missing_and_malformed_inputs_degrade_to_zero() {
    let kpis = vec![
        plain_kpi(1, "Jumlah Tiket", 50.0, 50.0),
        plain_kpi(2, "Kecepatan Respon", 50.0, 2.0),
    ];
    let inputs = RealizationInput::new().with(2, "cepat");

    let result = calculate(
        &kpis,
        &[],
        &[],
        &inputs,
        CalculationMethod::PointsBased,
        None,
    );

    assert_eq!(result.details.len(), 2);
    assert!(result.details.iter().all(|detail| detail.points == 0.0));
    assert_eq!(result.kpi_indicator, IndicatorOutcome::NotAvailable);
    assert_eq!(result.omset_indicator, BonusOutcome::NotAvailable);
}

#[test]
fn details_follow_input_order() {
    let kpis = vec![
        plain_kpi(9, "c", 10.0, 1.0),
        plain_kpi(4, "a", 10.0, 1.0),
        plain_kpi(7, "b", 10.0, 1.0),
    ];
    let result = calculate(
        &kpis,
        &[],
        &[],
        &RealizationInput::new(),
        CalculationMethod::PointsBased,
        None,
    );
    let ids: Vec<KpiId> = result.details.iter().map(|detail| detail.id).collect();
    assert_eq!(ids, vec![KpiId(9), KpiId(4), KpiId(7)]);
}

#[test]
fn repeated_requests_are_identical() {
    let request = CalculationRequest {
        kpi_configs: shopee_kpis(),
        bonus_schemes: omset_bonus_tiers(),
        kpi_indicators: indicator_tiers(),
        realizations: RealizationInput::new()
            .with(2, "987.654.321")
            .with(3, "12.345.678"),
        bonus_calculation_method: CalculationMethod::OmsetBased,
        custom_cost_keywords: Vec::new(),
    };

    let first = request.calculate();
    let second = request.calculate();

    assert_eq!(first, second);
    assert_eq!(
        first.grand_total_points.to_bits(),
        second.grand_total_points.to_bits()
    );
}
