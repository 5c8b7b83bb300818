use crate::error::EstimateError;
use crate::partition::Partition;

pub const DEFAULT_TOTAL_TERMS: u64 = 100_000_000;
pub const DEFAULT_WORKER_COUNT: usize = 50;
pub const MAX_WORKER_COUNT: usize = 4096;

/// How work items are handed to threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Spawn a thread per item, then join them all.
    #[default]
    ForkJoin,
    /// Spawn a thread per item and join it before spawning the next.
    Serialized,
    /// Feed items to a fixed pool over a channel and gather the results on another.
    ScatterGather,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimatorConfig {
    pub total_terms: u64,
    pub worker_count: usize,
    pub partition: Partition,
    pub strategy: Strategy,
}

impl EstimatorConfig {
    pub fn new(total_terms: u64, worker_count: usize) -> Self {
        Self {
            total_terms,
            worker_count,
            ..Self::default()
        }
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn validate(&self) -> Result<(), EstimateError> {
        check_worker_count(self.worker_count)
    }
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            total_terms: DEFAULT_TOTAL_TERMS,
            worker_count: DEFAULT_WORKER_COUNT,
            partition: Partition::default(),
            strategy: Strategy::default(),
        }
    }
}

/// Rejects worker counts outside `1..=MAX_WORKER_COUNT` before anything is allocated.
pub fn check_worker_count(worker_count: usize) -> Result<(), EstimateError> {
    if worker_count == 0 {
        return Err(EstimateError::InvalidWorkerCount(worker_count));
    }
    if worker_count > MAX_WORKER_COUNT {
        return Err(EstimateError::TooManyWorkers {
            requested: worker_count,
            max: MAX_WORKER_COUNT,
        });
    }
    Ok(())
}
