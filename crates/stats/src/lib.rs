pub mod dataset;
pub mod record;
pub mod summary;

pub use dataset::{Dataset, DatasetError};
pub use record::Record;
pub use summary::RegionSummary;

pub fn module_ready() -> bool {
    true
}
