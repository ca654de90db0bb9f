use crate::infra::{current_period, parse_period, parse_realization_pair, period_label};
use chrono::NaiveDate;
use clap::Args;
use kpi_bonus::calculation::{
    CalculationMethod, CalculationResult, KpiDefinition, KpiId, RealizationInput,
};
use kpi_bonus::config::AppConfig;
use kpi_bonus::divisions::{DivisionProfile, RealizationImporter, WEIGHT_POOL};
use kpi_bonus::error::AppError;
use kpi_bonus::format::{format_rupiah, indicator_tone};
use kpi_bonus::remote::{CalculationSource, RemoteCalculator};
use kpi_bonus::telemetry;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

#[derive(Args, Debug)]
pub(crate) struct CalculateArgs {
    /// Division name or slug, e.g. "Advertiser MP" or advertiser-mp
    #[arg(long)]
    pub(crate) division: String,
    /// CSV export with kpi_id,realisasi columns
    #[arg(long)]
    pub(crate) realizations: Option<PathBuf>,
    /// Realized value override as ID=VALUE (repeatable)
    #[arg(long = "input", value_parser = parse_realization_pair)]
    pub(crate) inputs: Vec<(KpiId, String)>,
    /// Reporting period (YYYY-MM). Defaults to the current month.
    #[arg(long, value_parser = parse_period)]
    pub(crate) period: Option<NaiveDate>,
    /// Ask the configured calculator services first, computing locally if none answer
    #[arg(long)]
    pub(crate) remote: bool,
    /// Print the result as JSON instead of a report
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Reporting period (YYYY-MM). Defaults to the current month.
    #[arg(long, value_parser = parse_period)]
    pub(crate) period: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CalculationReport<'a> {
    division: &'a str,
    period: String,
    source: &'a CalculationSource,
    result: &'a CalculationResult,
}

pub(crate) async fn run_calculate(args: CalculateArgs) -> Result<(), AppError> {
    let CalculateArgs {
        division,
        realizations,
        inputs,
        period,
        remote,
        json,
    } = args;

    let profile = DivisionProfile::find_preset(&division)
        .ok_or_else(|| AppError::InvalidArgument(format!("unknown division '{division}'")))?;

    let mut values = match realizations {
        Some(path) => RealizationImporter::from_path(path)?,
        None => RealizationInput::new(),
    };
    values.merge(inputs.into_iter().collect());

    let period = period.unwrap_or_else(current_period);
    let request = profile.request(values);

    let (result, source) = if remote {
        let config = AppConfig::load()?;
        telemetry::init(&config.telemetry)?;
        let calculator = RemoteCalculator::new(&config.remote)?;
        let outcome = calculator.calculate(&request).await;
        info!(division = %profile.name, source = ?outcome.source, "calculation finished");
        (outcome.result, outcome.source)
    } else {
        (request.calculate(), CalculationSource::Local)
    };

    if json {
        let report = CalculationReport {
            division: &profile.name,
            period: period.format("%Y-%m").to_string(),
            source: &source,
            result: &result,
        };
        let text = serde_json::to_string_pretty(&report).map_err(std::io::Error::from)?;
        println!("{text}");
    } else {
        render_division_result(&profile, &result, period, &source);
    }

    Ok(())
}

pub(crate) fn run_divisions() -> Result<(), AppError> {
    println!("Reference divisions");
    for profile in DivisionProfile::standard_presets() {
        let summary = profile.summary();
        let weight_note = if summary.balanced {
            "balanced".to_string()
        } else {
            format!("unbalanced, expected {}", WEIGHT_POOL)
        };
        println!(
            "- {} [{}] | {} | {} KPIs | weights {} ({}) | {} bonus tiers",
            summary.name,
            summary.slug,
            summary.calculation_method.label(),
            summary.kpi_count,
            summary.weight_total,
            weight_note,
            profile.bonus_tiers.len()
        );
    }
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let period = args.period.unwrap_or_else(current_period);

    println!("KPI bonus calculation demo");
    for profile in DivisionProfile::standard_presets() {
        let request = profile.request(sample_realizations(&profile));
        let result = request.calculate();
        println!();
        render_division_result(&profile, &result, period, &CalculationSource::Local);
    }
    Ok(())
}

/// Plausible month-end realizations for the reference divisions.
pub(crate) fn sample_realizations(profile: &DivisionProfile) -> RealizationInput {
    let entries: &[(u64, &str)] = match profile.slug().as_str() {
        "advertiser-mp" => &[
            (2, "300.000.000"),
            (3, "22.000.000"),
            (5, "120.000.000"),
            (6, "18.000.000"),
            (8, "90.000.000"),
            (9, "19.000.000"),
        ],
        "spv-advertiser" => &[(10, "1.100.000.000"), (11, "18,5"), (12, "3")],
        "tim-kreatif" => &[(19, "85"), (20, "1,2"), (21, "4,6"), (22, "2,1")],
        "admin-support" => &[(30, "1,5"), (31, "99,2"), (32, "96"), (33, "48")],
        _ => &[],
    };

    entries
        .iter()
        .map(|&(id, raw)| (KpiId(id), raw.to_string()))
        .collect()
}

pub(crate) fn render_division_result(
    profile: &DivisionProfile,
    result: &CalculationResult,
    period: NaiveDate,
    source: &CalculationSource,
) {
    println!(
        "{} ({}) - {}",
        profile.name,
        profile.calculation_method.label(),
        period_label(period)
    );
    if let CalculationSource::Remote { base_url } = source {
        println!("Calculated by {base_url}");
    }

    let weights = profile.weight_check();
    if !weights.balanced {
        println!(
            "Note: KPI weights sum to {} (expected {})",
            weights.total,
            WEIGHT_POOL
        );
    }

    let mut platform: Option<&str> = None;
    for kpi in &profile.kpis {
        if platform != Some(kpi.platform.as_str()) {
            println!("\n{}", kpi.platform);
            platform = Some(kpi.platform.as_str());
        }

        let Some(detail) = result.detail(kpi.id) else {
            continue;
        };
        println!(
            "- {}: {} of {} | score {:.1} | {:.2} / {} pts",
            kpi.name,
            display_value(kpi, detail.realized_value),
            display_value(kpi, kpi.target),
            detail.score,
            detail.points,
            kpi.weight
        );
    }

    println!("\nTotal points: {:.2}", result.grand_total_points);
    println!(
        "KPI indicator: {} ({})",
        result.kpi_indicator.name(),
        indicator_tone(result.kpi_indicator.name())
    );

    if profile.calculation_method.awards_bonus() {
        if profile.calculation_method == CalculationMethod::OmsetBased {
            println!(
                "Omset: {} of {}",
                format_rupiah(result.total_omset_realized),
                format_rupiah(result.total_omset_target)
            );
        }
        println!(
            "{}: {} (x{})",
            profile.calculation_method.bonus_label(),
            result.omset_indicator.name(),
            result.active_multiplier
        );
        println!("Final bonus: {}", format_rupiah(result.final_bonus));
    } else {
        println!("No bonus scheme for this division");
    }
}

fn display_value(kpi: &KpiDefinition, value: f64) -> String {
    if kpi.is_currency {
        format_rupiah(value)
    } else if kpi.is_percentage {
        format!("{}%", trim_decimal(value))
    } else {
        trim_decimal(value)
    }
}

fn trim_decimal(value: f64) -> String {
    let text = format!("{value:.2}");
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.replace('.', ",")
}
