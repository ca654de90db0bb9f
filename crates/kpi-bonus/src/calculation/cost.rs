/// Keywords marking a KPI as advertising/operational cost when none are configured.
pub const DEFAULT_COST_KEYWORDS: [&str; 5] = ["biaya", "cost", "spend", "ads", "iklan"];

/// Name-based classifier separating cost KPIs from revenue KPIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostClassifier {
    keywords: Vec<String>,
}

impl Default for CostClassifier {
    fn default() -> Self {
        Self {
            keywords: DEFAULT_COST_KEYWORDS
                .iter()
                .map(|keyword| keyword.to_string())
                .collect(),
        }
    }
}

impl CostClassifier {
    /// A non-empty custom list replaces the defaults. Entries are trimmed and
    /// lower-cased; blank entries are dropped.
    pub fn new(custom: Option<&[String]>) -> Self {
        match custom {
            Some(keywords) if !keywords.is_empty() => Self {
                keywords: keywords
                    .iter()
                    .map(|keyword| keyword.trim().to_lowercase())
                    .filter(|keyword| !keyword.is_empty())
                    .collect(),
            },
            _ => Self::default(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_cost_kpi(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| name.contains(keyword.as_str()))
    }
}
