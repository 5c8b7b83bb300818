use crate::config::check_worker_count;
use crate::error::EstimateError;
use crate::work::WorkItem;

/// How terms that don't fill a whole block are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Partition {
    /// Every worker gets `total_terms / worker_count` terms; trailing terms are dropped.
    #[default]
    Truncate,
    /// As `Truncate`, but the last worker also takes the trailing terms.
    Remainder,
}

pub fn block_size(total_terms: u64, worker_count: usize) -> Result<u64, EstimateError> {
    check_worker_count(worker_count)?;
    let block: u64 = total_terms / worker_count as u64;
    Ok(block)
}

/// Number of terms that actually get summed under `policy`.
pub fn covered_terms(
    total_terms: u64,
    worker_count: usize,
    policy: Partition,
) -> Result<u64, EstimateError> {
    let block: u64 = block_size(total_terms, worker_count)?;
    let covered: u64 = match policy {
        Partition::Truncate => block * worker_count as u64,
        Partition::Remainder => total_terms,
    };
    Ok(covered)
}

pub fn partition(
    total_terms: u64,
    worker_count: usize,
    policy: Partition,
) -> Result<Vec<WorkItem>, EstimateError> {
    let block: u64 = block_size(total_terms, worker_count)?;
    let remainder: u64 = total_terms - block * worker_count as u64;
    let mut items: Vec<WorkItem> = Vec::with_capacity(worker_count);

    for id in 0..worker_count {
        let start: u64 = block * id as u64;
        let is_last: bool = id == worker_count - 1;
        let count: u64 = match policy {
            Partition::Remainder if is_last => block + remainder,
            _ => block,
        };
        items.push(WorkItem::new(id, start, count));
    }

    if policy == Partition::Truncate && remainder > 0 {
        log::warn!(
            "{} trailing terms are not divisible across {} workers and will be skipped",
            remainder,
            worker_count
        );
    }
    Ok(items)
}
