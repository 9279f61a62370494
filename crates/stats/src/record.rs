use std::fmt;

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct Record {
    pub region: String,
    pub latency_ms: f64,
    pub uptime_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordError {
    EmptyRegion,
    NonFiniteLatency,
    NegativeLatency,
    UptimeOutOfRange,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRegion => write!(f, "region must not be empty or whitespace"),
            Self::NonFiniteLatency => write!(f, "latency_ms must be finite"),
            Self::NegativeLatency => write!(f, "latency_ms must not be negative"),
            Self::UptimeOutOfRange => {
                write!(f, "uptime_pct must be a finite percentage between 0 and 100")
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl Record {
    pub fn validate(&self) -> Result<(), RecordError> {
        if self.region.trim().is_empty() {
            return Err(RecordError::EmptyRegion);
        }
        if !self.latency_ms.is_finite() {
            return Err(RecordError::NonFiniteLatency);
        }
        if self.latency_ms < 0.0 {
            return Err(RecordError::NegativeLatency);
        }
        if !self.uptime_pct.is_finite() || !(0.0..=100.0).contains(&self.uptime_pct) {
            return Err(RecordError::UptimeOutOfRange);
        }
        Ok(())
    }
}
