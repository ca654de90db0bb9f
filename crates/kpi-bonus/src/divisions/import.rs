use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use crate::calculation::{KpiId, RealizationInput};

#[derive(Debug, thiserror::Error)]
pub enum RealizationImportError {
    #[error("failed to read realization file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid realization CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("KPI {id} appears more than once (row {row})")]
    DuplicateKpi { id: KpiId, row: usize },
}

#[derive(Debug, Deserialize)]
struct RealizationRow {
    #[serde(alias = "id")]
    kpi_id: u64,
    #[serde(alias = "value", default)]
    realisasi: String,
}

/// Loads raw realized values from a `kpi_id,realisasi` CSV export.
pub struct RealizationImporter;

impl RealizationImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<RealizationInput, RealizationImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<RealizationInput, RealizationImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut seen = HashSet::new();
        let mut realizations = RealizationInput::new();

        for (index, record) in csv_reader.deserialize::<RealizationRow>().enumerate() {
            let row = record?;
            let id = KpiId(row.kpi_id);
            if !seen.insert(id) {
                return Err(RealizationImportError::DuplicateKpi { id, row: index + 1 });
            }
            realizations.insert(id, row.realisasi);
        }

        Ok(realizations)
    }
}
