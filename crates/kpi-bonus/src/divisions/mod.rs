//! Reference division configurations and advisory checks over KPI sets.

pub mod import;
mod presets;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::calculation::{
    BonusTier, CalculationMethod, CalculationRequest, IndicatorTier, KpiDefinition,
    RealizationInput, SpecialCalc,
};

pub use import::{RealizationImportError, RealizationImporter};

/// Target sum of KPI weights for one division.
pub const WEIGHT_POOL: f64 = 100.0;
const WEIGHT_TOLERANCE: f64 = 0.01;
const LEGACY_ROAS_MARKER: &str = "roas";

/// Complete calculation setup of one division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionProfile {
    pub name: String,
    pub calculation_method: CalculationMethod,
    pub cost_keywords: Vec<String>,
    pub kpis: Vec<KpiDefinition>,
    pub bonus_tiers: Vec<BonusTier>,
    pub indicator_tiers: Vec<IndicatorTier>,
}

impl DivisionProfile {
    /// The four reference divisions shipped with the calculator.
    pub fn standard_presets() -> Vec<Self> {
        presets::standard_divisions()
    }

    /// Looks a preset up by display name or slug, ignoring case.
    pub fn find_preset(name: &str) -> Option<Self> {
        let wanted = slugify(name);
        if wanted.is_empty() {
            return None;
        }
        Self::standard_presets()
            .into_iter()
            .find(|profile| profile.slug() == wanted)
    }

    /// Lower-case, hyphen separated form of the name, e.g. `advertiser-mp`.
    pub fn slug(&self) -> String {
        slugify(&self.name)
    }

    pub fn request(&self, realizations: RealizationInput) -> CalculationRequest {
        CalculationRequest {
            kpi_configs: self.kpis.clone(),
            bonus_schemes: self.bonus_tiers.clone(),
            kpi_indicators: self.indicator_tiers.clone(),
            realizations,
            bonus_calculation_method: self.calculation_method,
            custom_cost_keywords: self.cost_keywords.clone(),
        }
    }

    /// Converts this division's legacy ROAS-named KPIs, see [`convert_legacy_roas`].
    pub fn convert_legacy_roas(&mut self) -> usize {
        let converted = convert_legacy_roas(&mut self.kpis);
        if converted > 0 {
            info!(division = %self.name, converted, "converted legacy ROAS KPIs");
        }
        converted
    }

    pub fn weight_check(&self) -> WeightCheck {
        weight_check(&self.kpis)
    }

    pub fn summary(&self) -> DivisionSummary {
        let weights = self.weight_check();
        DivisionSummary {
            name: self.name.clone(),
            slug: self.slug(),
            calculation_method: self.calculation_method,
            kpi_count: self.kpis.len(),
            weight_total: weights.total,
            balanced: weights.balanced,
        }
    }
}

/// Listing entry for a division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionSummary {
    pub name: String,
    pub slug: String,
    pub calculation_method: CalculationMethod,
    pub kpi_count: usize,
    pub weight_total: f64,
    pub balanced: bool,
}

/// Sum of KPI weights and whether it fills the 100 point pool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightCheck {
    pub total: f64,
    pub balanced: bool,
}

pub fn weight_check(kpis: &[KpiDefinition]) -> WeightCheck {
    let total: f64 = kpis.iter().map(|kpi| kpi.weight).sum();
    WeightCheck {
        total,
        balanced: (total - WEIGHT_POOL).abs() <= WEIGHT_TOLERANCE,
    }
}

/// KPIs named like a ROAS metric but not flagged as one.
pub fn legacy_roas_candidates(kpis: &[KpiDefinition]) -> impl Iterator<Item = &KpiDefinition> {
    kpis.iter().filter(|kpi| is_legacy_roas(kpi))
}

/// Turns every KPI whose name mentions "roas" into a derived ROAS KPI.
///
/// The target becomes a plain ratio (neither currency nor percentage) and any
/// minimum target is kept. Returns how many KPIs changed.
pub fn convert_legacy_roas(kpis: &mut [KpiDefinition]) -> usize {
    let mut converted = 0;
    for kpi in kpis.iter_mut().filter(|kpi| is_legacy_roas(kpi)) {
        kpi.special_calc = Some(SpecialCalc::Roas);
        kpi.is_currency = false;
        kpi.is_percentage = false;
        converted += 1;
    }
    converted
}

fn is_legacy_roas(kpi: &KpiDefinition) -> bool {
    !kpi.is_roas() && kpi.name.to_lowercase().contains(LEGACY_ROAS_MARKER)
}

fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
