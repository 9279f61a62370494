use std::{collections::BTreeMap, sync::Arc};

use stats::{Dataset, RegionSummary};

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct MetricsRequest {
    #[serde(default)]
    pub regions: Vec<String>,
    #[serde(default)]
    pub threshold_ms: f64,
}

#[derive(Debug, Clone, Eq, PartialEq, serde::Serialize)]
pub struct RegionsResponse {
    pub regions: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct AppState {
    dataset: Arc<Dataset>,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn metrics(&self, request: &MetricsRequest) -> BTreeMap<String, RegionSummary> {
        self.dataset
            .summarize(&request.regions, request.threshold_ms)
    }

    pub fn regions(&self) -> RegionsResponse {
        RegionsResponse {
            regions: self.dataset.region_names(),
        }
    }
}
