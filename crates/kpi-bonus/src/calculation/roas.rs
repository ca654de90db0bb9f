use super::cost::CostClassifier;
use super::domain::{KpiDefinition, KpiId, RealizationInput};
use std::collections::HashMap;

const REVENUE_NAME_MARKER: &str = "omset";

/// The three KPIs participating in one platform's ROAS derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoasPairing<'a> {
    pub roas: &'a KpiDefinition,
    pub revenue: &'a KpiDefinition,
    pub cost: &'a KpiDefinition,
}

impl RoasPairing<'_> {
    /// Revenue over cost, or zero when cost is not positive.
    pub fn derive(&self, realizations: &RealizationInput) -> f64 {
        let revenue = realizations.currency(self.revenue.id);
        let cost = realizations.currency(self.cost.id);
        if cost > 0.0 {
            let ratio = revenue / cost;
            if ratio.is_finite() {
                return ratio;
            }
        }
        0.0
    }
}

/// Derived ROAS values keyed by the ROAS KPI they stand in for.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoasValues {
    values: HashMap<KpiId, f64>,
}

impl RoasValues {
    pub fn get(&self, id: KpiId) -> Option<f64> {
        self.values.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Distinct platform labels in order of first appearance.
pub fn platforms(kpis: &[KpiDefinition]) -> Vec<&str> {
    let mut seen = Vec::new();
    for kpi in kpis {
        if !seen.contains(&kpi.platform.as_str()) {
            seen.push(kpi.platform.as_str());
        }
    }
    seen
}

/// Locates the ROAS, revenue and cost KPIs of one platform. First match wins.
pub fn find_pairing<'a>(
    kpis: &'a [KpiDefinition],
    platform: &str,
    classifier: &CostClassifier,
) -> Option<RoasPairing<'a>> {
    let mut group = kpis.iter().filter(|kpi| kpi.platform == platform);

    let roas = group.clone().find(|kpi| kpi.is_roas())?;

    let revenue = group
        .clone()
        .find(|kpi| kpi.is_currency && kpi.name.to_lowercase().contains(REVENUE_NAME_MARKER))
        .or_else(|| {
            group.clone().find(|kpi| {
                kpi.is_currency && !classifier.is_cost_kpi(&kpi.name) && !kpi.is_roas()
            })
        })?;

    let cost = group.find(|kpi| classifier.is_cost_kpi(&kpi.name))?;

    Some(RoasPairing {
        roas,
        revenue,
        cost,
    })
}

/// Computes the derived ROAS for every platform that has a complete pairing.
pub fn resolve(
    kpis: &[KpiDefinition],
    realizations: &RealizationInput,
    classifier: &CostClassifier,
) -> RoasValues {
    let values = platforms(kpis)
        .into_iter()
        .filter_map(|platform| find_pairing(kpis, platform, classifier))
        .map(|pairing| (pairing.roas.id, pairing.derive(realizations)))
        .collect();

    RoasValues { values }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::domain::SpecialCalc;

    fn kpi(id: u64, platform: &str, name: &str, is_currency: bool) -> KpiDefinition {
        KpiDefinition {
            id: KpiId(id),
            platform: platform.to_string(),
            name: name.to_string(),
            weight: 10.0,
            target: 100.0,
            min_target: None,
            direction: Default::default(),
            is_currency,
            is_percentage: false,
            special_calc: None,
            point_capping: Default::default(),
        }
    }

    fn roas(id: u64, platform: &str) -> KpiDefinition {
        KpiDefinition {
            special_calc: Some(SpecialCalc::Roas),
            ..kpi(id, platform, &format!("ROAS {platform}"), false)
        }
    }

    #[test]
    fn prefers_omset_named_revenue_kpi() {
        let kpis = vec![
            roas(1, "Shopee"),
            kpi(2, "Shopee", "Penjualan Voucher", true),
            kpi(3, "Shopee", "Realisasi Omset Shopee", true),
            kpi(4, "Shopee", "Biaya Iklan Shopee", true),
        ];
        let pairing =
            find_pairing(&kpis, "Shopee", &CostClassifier::default()).expect("pairing resolves");
        assert_eq!(pairing.revenue.id, KpiId(3));
        assert_eq!(pairing.cost.id, KpiId(4));
    }

    #[test]
    fn falls_back_to_first_non_cost_currency_kpi() {
        let kpis = vec![
            kpi(4, "Lazada", "Biaya Iklan Lazada", true),
            roas(1, "Lazada"),
            kpi(2, "Lazada", "Penjualan Lazada", true),
            kpi(3, "Lazada", "Penjualan Bundling", true),
        ];
        let pairing =
            find_pairing(&kpis, "Lazada", &CostClassifier::default()).expect("pairing resolves");
        assert_eq!(pairing.revenue.id, KpiId(2));
    }

    #[test]
    fn pairing_is_scoped_to_platform() {
        let kpis = vec![
            roas(1, "Shopee"),
            kpi(2, "Lazada", "Realisasi Omset Lazada", true),
            kpi(3, "Shopee", "Biaya Iklan Shopee", true),
        ];
        assert!(find_pairing(&kpis, "Shopee", &CostClassifier::default()).is_none());
    }

    #[test]
    fn zero_cost_derives_zero() {
        let kpis = vec![
            roas(1, "TikTok"),
            kpi(2, "TikTok", "Omset TikTok", true),
            kpi(3, "TikTok", "Biaya Iklan TikTok", true),
        ];
        let inputs = RealizationInput::new()
            .with(2, "50.000.000")
            .with(3, "0");
        let values = resolve(&kpis, &inputs, &CostClassifier::default());
        assert_eq!(values.get(KpiId(1)), Some(0.0));
    }

    #[test]
    fn first_roas_kpi_of_a_platform_wins() {
        let kpis = vec![
            roas(1, "Shopee"),
            roas(5, "Shopee"),
            kpi(2, "Shopee", "Omset Shopee", true),
            kpi(3, "Shopee", "Biaya Iklan Shopee", true),
        ];
        let inputs = RealizationInput::new()
            .with(2, "120.000.000")
            .with(3, "10.000.000");
        let values = resolve(&kpis, &inputs, &CostClassifier::default());
        assert_eq!(values.get(KpiId(1)), Some(12.0));
        assert_eq!(values.get(KpiId(5)), None);
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn platforms_keep_first_appearance_order() {
        let kpis = vec![
            kpi(1, "B", "x", false),
            kpi(2, "A", "y", false),
            kpi(3, "B", "z", false),
        ];
        assert_eq!(platforms(&kpis), vec!["B", "A"]);
    }
}
