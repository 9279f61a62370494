use std::{collections::BTreeMap, fmt, fs, io, path::Path};

use crate::record::{Record, RecordError};
use crate::summary::RegionSummary;

#[derive(Debug)]
pub enum DatasetError {
    Io(io::Error),
    Parse(serde_json::Error),
    InvalidRecord { index: usize, source: RecordError },
}

impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read dataset file: {err}"),
            Self::Parse(err) => write!(f, "dataset is not a valid JSON record array: {err}"),
            Self::InvalidRecord { index, source } => {
                write!(f, "dataset record {index} is invalid: {source}")
            }
        }
    }
}

impl std::error::Error for DatasetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::InvalidRecord { source, .. } => Some(source),
        }
    }
}

/// Immutable set of observations, loaded once at startup.
#[derive(Debug)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn from_json_str(raw: &str) -> Result<Self, DatasetError> {
        let records: Vec<Record> = serde_json::from_str(raw).map_err(DatasetError::Parse)?;
        for (index, record) in records.iter().enumerate() {
            record
                .validate()
                .map_err(|source| DatasetError::InvalidRecord { index, source })?;
        }
        Ok(Self { records })
    }

    pub fn from_file(path: &Path) -> Result<Self, DatasetError> {
        let raw = fs::read_to_string(path).map_err(DatasetError::Io)?;
        Self::from_json_str(&raw)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn region_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .records
            .iter()
            .map(|record| record.region.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Summaries for the requested regions. Regions without records are
    /// omitted; a region requested twice produces one entry.
    pub fn summarize(
        &self,
        regions: &[String],
        threshold_ms: f64,
    ) -> BTreeMap<String, RegionSummary> {
        let mut summaries = BTreeMap::new();
        for region in regions {
            if summaries.contains_key(region) {
                continue;
            }
            let matching: Vec<&Record> = self
                .records
                .iter()
                .filter(|record| &record.region == region)
                .collect();
            if let Some(summary) = RegionSummary::from_records(&matching, threshold_ms) {
                summaries.insert(region.clone(), summary);
            }
        }
        summaries
    }
}
