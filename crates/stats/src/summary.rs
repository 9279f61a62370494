use crate::record::Record;

#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct RegionSummary {
    pub avg_latency: f64,
    pub p95_latency: f64,
    pub avg_uptime: f64,
    pub breaches: u64,
}

impl RegionSummary {
    pub fn from_records(records: &[&Record], threshold_ms: f64) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let mut latencies: Vec<f64> = records.iter().map(|record| record.latency_ms).collect();
        latencies.sort_by(f64::total_cmp);
        let count = latencies.len();

        let avg_latency = latencies.iter().sum::<f64>() / count as f64;
        let p95_latency = latencies[p95_lower_rank(count)];
        let avg_uptime =
            records.iter().map(|record| record.uptime_pct).sum::<f64>() / count as f64;
        let breaches = latencies
            .iter()
            .filter(|latency| **latency > threshold_ms)
            .count() as u64;

        Some(Self {
            avg_latency,
            p95_latency,
            avg_uptime,
            breaches,
        })
    }
}

// Lower-rank convention: floor(0.95 * n) - 1, never below the first element.
fn p95_lower_rank(count: usize) -> usize {
    (95 * count / 100).saturating_sub(1)
}
