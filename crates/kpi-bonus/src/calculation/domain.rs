use super::parsing::{finite_or_zero, parse_currency, parse_localized_number};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Neutral presentation tag reported when no indicator tier qualifies.
pub const NEUTRAL_INDICATOR_COLOR: &str = "bg-slate-400";

/// Label carried by both "no tier qualified" sentinels on the wire.
pub const NOT_AVAILABLE_LABEL: &str = "N/A";

/// Stable identity of a configured KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KpiId(pub u64);

impl std::fmt::Display for KpiId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    HigherIsBetter,
    LowerIsBetter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialCalc {
    #[serde(rename = "ROAS")]
    Roas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointCapping {
    #[default]
    Uncapped,
    Capped,
}

/// Drives which aggregate selects the bonus multiplier tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalculationMethod {
    #[default]
    OmsetBased,
    PointsBased,
    NonSales,
}

impl CalculationMethod {
    pub const fn label(self) -> &'static str {
        match self {
            Self::OmsetBased => "Omset based",
            Self::PointsBased => "Points based",
            Self::NonSales => "Non sales",
        }
    }

    /// Heading used when presenting the selected bonus tier.
    pub const fn bonus_label(self) -> &'static str {
        match self {
            Self::PointsBased => "Indikator Performa",
            Self::OmsetBased | Self::NonSales => "Indikator Omset",
        }
    }

    pub const fn awards_bonus(self) -> bool {
        !matches!(self, Self::NonSales)
    }
}

/// One configured KPI of a division.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDefinition {
    pub id: KpiId,
    #[serde(default)]
    pub platform: String,
    pub name: String,
    #[serde(rename = "bobot", alias = "weight", default)]
    pub weight: f64,
    #[serde(default)]
    pub target: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_target: Option<f64>,
    #[serde(rename = "type", alias = "direction", default)]
    pub direction: Direction,
    #[serde(default)]
    pub is_currency: bool,
    #[serde(default)]
    pub is_percentage: bool,
    #[serde(default)]
    pub special_calc: Option<SpecialCalc>,
    #[serde(default)]
    pub point_capping: PointCapping,
}

impl KpiDefinition {
    pub fn is_roas(&self) -> bool {
        self.special_calc == Some(SpecialCalc::Roas)
    }
}

/// Multiplier scheme entry keyed by omset or point threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BonusTier {
    pub id: u64,
    pub name: String,
    pub threshold: f64,
    pub multiplier: f64,
}

/// Qualitative label keyed by a point threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorTier {
    pub id: u64,
    pub name: String,
    pub threshold: f64,
    #[serde(default)]
    pub color: String,
}

/// One realized value as received: typed text, or a number sent as a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RealizationValue {
    Number(f64),
    Text(String),
}

impl RealizationValue {
    /// Reads the value as a dot-grouped monetary amount.
    pub fn currency(&self) -> f64 {
        match self {
            Self::Number(value) => finite_or_zero(*value),
            Self::Text(text) => parse_currency(text),
        }
    }

    /// Reads the value as a plain number with an optional decimal comma.
    pub fn number(&self) -> f64 {
        match self {
            Self::Number(value) => finite_or_zero(*value),
            Self::Text(text) => parse_localized_number(text),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<String> for RealizationValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RealizationValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<f64> for RealizationValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Realized values keyed by KPI id. Missing entries read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RealizationInput {
    #[serde(deserialize_with = "deserialize_raw_values")]
    values: BTreeMap<KpiId, RealizationValue>,
}

impl RealizationInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: u64, value: impl Into<RealizationValue>) -> Self {
        self.insert(KpiId(id), value);
        self
    }

    pub fn insert(
        &mut self,
        id: KpiId,
        value: impl Into<RealizationValue>,
    ) -> Option<RealizationValue> {
        self.values.insert(id, value.into())
    }

    pub fn get(&self, id: KpiId) -> Option<&RealizationValue> {
        self.values.get(&id)
    }

    /// Typed text for a KPI; missing and numeric entries read as empty.
    pub fn raw(&self, id: KpiId) -> &str {
        self.get(id).and_then(RealizationValue::as_text).unwrap_or("")
    }

    pub fn currency(&self, id: KpiId) -> f64 {
        self.get(id).map(RealizationValue::currency).unwrap_or(0.0)
    }

    pub fn number(&self, id: KpiId) -> f64 {
        self.get(id).map(RealizationValue::number).unwrap_or(0.0)
    }

    pub fn contains(&self, id: KpiId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (KpiId, &RealizationValue)> {
        self.values.iter().map(|(id, value)| (*id, value))
    }

    /// Overlays every entry of `other` on top of this input.
    pub fn merge(&mut self, other: RealizationInput) {
        self.values.extend(other.values);
    }
}

impl FromIterator<(KpiId, String)> for RealizationInput {
    fn from_iter<I: IntoIterator<Item = (KpiId, String)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(id, text)| (id, RealizationValue::Text(text)))
                .collect(),
        }
    }
}

fn deserialize_raw_values<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<KpiId, RealizationValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<KpiId, Option<RealizationValue>>::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|(id, value)| (id, value.unwrap_or_else(|| RealizationValue::Text(String::new()))))
        .collect())
}

/// Per-KPI outcome of a calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiResultDetail {
    pub id: KpiId,
    pub score: f64,
    #[serde(rename = "poin", alias = "points")]
    pub points: f64,
    #[serde(rename = "realisasi", alias = "realizedValue")]
    pub realized_value: f64,
}

/// Selected qualitative indicator, or the "not available" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TierWire", into = "TierWire")]
pub enum IndicatorOutcome {
    Matched(IndicatorTier),
    NotAvailable,
}

impl IndicatorOutcome {
    pub fn tier(&self) -> Option<&IndicatorTier> {
        match self {
            Self::Matched(tier) => Some(tier),
            Self::NotAvailable => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Matched(tier) => &tier.name,
            Self::NotAvailable => NOT_AVAILABLE_LABEL,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Self::Matched(tier) => &tier.color,
            Self::NotAvailable => NEUTRAL_INDICATOR_COLOR,
        }
    }
}

/// Selected bonus multiplier tier, or the "not available" sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TierWire", into = "TierWire")]
pub enum BonusOutcome {
    Matched(BonusTier),
    NotAvailable,
}

impl BonusOutcome {
    pub fn tier(&self) -> Option<&BonusTier> {
        match self {
            Self::Matched(tier) => Some(tier),
            Self::NotAvailable => None,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Matched(tier) => &tier.name,
            Self::NotAvailable => NOT_AVAILABLE_LABEL,
        }
    }

    pub fn threshold(&self) -> Option<f64> {
        self.tier().map(|tier| tier.threshold)
    }
}

/// Shared wire shape for both tier outcomes. Objects without an `id` are sentinels.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TierWire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<u64>,
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    threshold: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    multiplier: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
}

impl From<IndicatorOutcome> for TierWire {
    fn from(value: IndicatorOutcome) -> Self {
        match value {
            IndicatorOutcome::Matched(tier) => Self {
                id: Some(tier.id),
                name: tier.name,
                threshold: Some(tier.threshold),
                multiplier: None,
                color: Some(tier.color),
            },
            IndicatorOutcome::NotAvailable => Self {
                id: None,
                name: NOT_AVAILABLE_LABEL.to_string(),
                threshold: None,
                multiplier: None,
                color: Some(NEUTRAL_INDICATOR_COLOR.to_string()),
            },
        }
    }
}

impl From<TierWire> for IndicatorOutcome {
    fn from(value: TierWire) -> Self {
        match value.id {
            Some(id) => Self::Matched(IndicatorTier {
                id,
                name: value.name,
                threshold: value.threshold.unwrap_or_default(),
                color: value.color.unwrap_or_default(),
            }),
            None => Self::NotAvailable,
        }
    }
}

impl From<BonusOutcome> for TierWire {
    fn from(value: BonusOutcome) -> Self {
        match value {
            BonusOutcome::Matched(tier) => Self {
                id: Some(tier.id),
                name: tier.name,
                threshold: Some(tier.threshold),
                multiplier: Some(tier.multiplier),
                color: None,
            },
            BonusOutcome::NotAvailable => Self {
                id: None,
                name: NOT_AVAILABLE_LABEL.to_string(),
                threshold: None,
                multiplier: None,
                color: None,
            },
        }
    }
}

impl From<TierWire> for BonusOutcome {
    fn from(value: TierWire) -> Self {
        match value.id {
            Some(id) => Self::Matched(BonusTier {
                id,
                name: value.name,
                threshold: value.threshold.unwrap_or_default(),
                multiplier: value.multiplier.unwrap_or_default(),
            }),
            None => Self::NotAvailable,
        }
    }
}

/// Immutable record produced by one calculation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    #[serde(rename = "grandTotalPoin", alias = "grandTotalPoints")]
    pub grand_total_points: f64,
    pub final_bonus: f64,
    pub active_multiplier: f64,
    pub kpi_indicator: IndicatorOutcome,
    pub omset_indicator: BonusOutcome,
    #[serde(rename = "totalOmsetRealisasi", alias = "totalOmsetRealized")]
    pub total_omset_realized: f64,
    pub total_omset_target: f64,
    pub details: Vec<KpiResultDetail>,
}

impl CalculationResult {
    pub fn detail(&self, id: KpiId) -> Option<&KpiResultDetail> {
        self.details.iter().find(|detail| detail.id == id)
    }
}

/// Wire request accepted by the `/calculate` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub kpi_configs: Vec<KpiDefinition>,
    #[serde(default)]
    pub bonus_schemes: Vec<BonusTier>,
    #[serde(default)]
    pub kpi_indicators: Vec<IndicatorTier>,
    #[serde(default, rename = "realisasiInputs", alias = "realizationInputs")]
    pub realizations: RealizationInput,
    #[serde(default)]
    pub bonus_calculation_method: CalculationMethod,
    #[serde(default, deserialize_with = "deserialize_keywords")]
    pub custom_cost_keywords: Vec<String>,
}

fn deserialize_keywords<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
