mod channel;
mod config;
mod error;
mod iterator;
mod manager;
mod order;
mod partition;
mod status;
mod work;
mod worker;

pub mod series;

pub use config::EstimatorConfig;
pub use config::Strategy;
pub use config::{DEFAULT_TOTAL_TERMS, DEFAULT_WORKER_COUNT, MAX_WORKER_COUNT};
pub use error::EstimateError;
pub use manager::estimate;
pub use manager::Estimate;
pub use manager::PiEstimator;
pub use partition::{block_size, covered_terms, partition, Partition};
pub use work::WorkItem;
