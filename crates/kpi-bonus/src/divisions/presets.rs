use crate::calculation::{
    BonusTier, CalculationMethod, Direction, IndicatorTier, KpiDefinition, KpiId, PointCapping,
    SpecialCalc, DEFAULT_COST_KEYWORDS,
};

use super::DivisionProfile;

pub(super) fn standard_divisions() -> Vec<DivisionProfile> {
    vec![
        advertiser_marketplace(),
        advertiser_supervisor(),
        creative_team(),
        admin_support(),
    ]
}

fn default_cost_keywords() -> Vec<String> {
    DEFAULT_COST_KEYWORDS
        .iter()
        .map(|keyword| keyword.to_string())
        .collect()
}

fn kpi(id: u64, platform: &str, name: &str, weight: f64, target: f64) -> KpiDefinition {
    KpiDefinition {
        id: KpiId(id),
        platform: platform.to_string(),
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

fn roas(id: u64, platform: &str, target: f64, min_target: f64) -> KpiDefinition {
    KpiDefinition {
        min_target: Some(min_target),
        special_calc: Some(SpecialCalc::Roas),
        ..kpi(id, platform, &format!("ROAS {platform}"), 15.0, target)
    }
}

fn omset(id: u64, platform: &str, weight: f64, target: f64) -> KpiDefinition {
    KpiDefinition {
        is_currency: true,
        ..kpi(
            id,
            platform,
            &format!("Realisasi Omset {platform}"),
            weight,
            target,
        )
    }
}

fn ad_cost(id: u64, platform: &str, weight: f64, target: f64) -> KpiDefinition {
    KpiDefinition {
        direction: Direction::LowerIsBetter,
        is_currency: true,
        ..kpi(
            id,
            platform,
            &format!("Efisiensi Biaya Iklan {platform}"),
            weight,
            target,
        )
    }
}

fn lower(kpi: KpiDefinition) -> KpiDefinition {
    KpiDefinition {
        direction: Direction::LowerIsBetter,
        ..kpi
    }
}

fn percentage(kpi: KpiDefinition) -> KpiDefinition {
    KpiDefinition {
        is_percentage: true,
        ..kpi
    }
}

fn bonus_tiers(entries: &[(u64, &str, f64, f64)]) -> Vec<BonusTier> {
    entries
        .iter()
        .map(|&(id, name, threshold, multiplier)| BonusTier {
            id,
            name: name.to_string(),
            threshold,
            multiplier,
        })
        .collect()
}

fn omset_bonus_tiers() -> Vec<BonusTier> {
    bonus_tiers(&[
        (1, "Bad Perform 1", 500_000_000.0, 8.0),
        (2, "Average 1", 975_000_000.0, 13.0),
        (3, "Excellent 1", 1_950_000_000.0, 19.0),
    ])
}

fn standard_indicator_tiers() -> Vec<IndicatorTier> {
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

fn advertiser_marketplace() -> DivisionProfile {
    DivisionProfile {
        name: "Advertiser MP".to_string(),
        calculation_method: CalculationMethod::OmsetBased,
        cost_keywords: default_cost_keywords(),
        kpis: vec![
            roas(1, "Shopee", 12.0, 10.0),
            omset(2, "Shopee", 10.0, 250_000_000.0),
            ad_cost(3, "Shopee", 5.0, 25_000_000.0),
            roas(4, "Lazada", 8.0, 6.0),
            omset(5, "Lazada", 10.0, 150_000_000.0),
            ad_cost(6, "Lazada", 5.0, 20_000_000.0),
            roas(7, "TikTok Shop", 5.0, 4.0),
            omset(8, "TikTok Shop", 15.0, 100_000_000.0),
            ad_cost(9, "TikTok Shop", 10.0, 20_000_000.0),
        ],
        bonus_tiers: omset_bonus_tiers(),
        indicator_tiers: standard_indicator_tiers(),
    }
}

fn advertiser_supervisor() -> DivisionProfile {
    DivisionProfile {
        name: "SPV Advertiser".to_string(),
        calculation_method: CalculationMethod::OmsetBased,
        cost_keywords: default_cost_keywords(),
        kpis: vec![
            KpiDefinition {
                is_currency: true,
                ..kpi(10, "Tim", "Total Omset Tim", 40.0, 1_000_000_000.0)
            },
            percentage(kpi(11, "Tim", "Profitabilitas Tim (%)", 40.0, 20.0)),
            kpi(12, "Tim", "Pertumbuhan Advertiser Baru", 20.0, 2.0),
        ],
        bonus_tiers: omset_bonus_tiers(),
        indicator_tiers: standard_indicator_tiers(),
    }
}

fn creative_team() -> DivisionProfile {
    DivisionProfile {
        name: "Tim Kreatif".to_string(),
        calculation_method: CalculationMethod::PointsBased,
        cost_keywords: default_cost_keywords(),
        kpis: vec![
            kpi(19, "Produksi", "Jumlah Aset Selesai (per bulan)", 30.0, 80.0),
            lower(kpi(20, "Kualitas", "Tingkat Revisi Rata-rata", 25.0, 1.5)),
            KpiDefinition {
                point_capping: PointCapping::Capped,
                ..kpi(21, "Kualitas", "Skor Kualitas Internal (skala 1-5)", 20.0, 4.5)
            },
            percentage(kpi(22, "Performa Iklan", "Rata-rata CTR Aset Iklan", 25.0, 2.0)),
        ],
        bonus_tiers: bonus_tiers(&[
            (101, "Good", 80.0, 10.0),
            (102, "Excellent", 95.0, 15.0),
            (103, "Outstanding", 105.0, 20.0),
        ]),
        indicator_tiers: standard_indicator_tiers(),
    }
}

fn admin_support() -> DivisionProfile {
    DivisionProfile {
        name: "Admin Support".to_string(),
        calculation_method: CalculationMethod::NonSales,
        cost_keywords: default_cost_keywords(),
        kpis: vec![
            lower(kpi(30, "Administrasi", "Kecepatan Respon Laporan (jam)", 30.0, 2.0)),
            percentage(kpi(31, "Administrasi", "Akurasi Data Entry (%)", 30.0, 99.0)),
            percentage(kpi(
                32,
                "Administrasi",
                "Penyelesaian Tugas Tepat Waktu (%)",
                25.0,
                95.0,
            )),
            kpi(33, "Dukungan", "Jumlah Tiket Dukungan Terselesaikan", 15.0, 50.0),
        ],
        bonus_tiers: Vec::new(),
        indicator_tiers: standard_indicator_tiers(),
    }
}
