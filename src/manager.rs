use std::thread;
use std::time::{Duration, Instant};

use crate::channel::{self, CountedReceiver, CountedSender};
use crate::config::{EstimatorConfig, Strategy};
use crate::error::EstimateError;
use crate::iterator::GatherIter;
use crate::partition;
use crate::work::WorkItem;
use crate::worker::{self, ThreadWorker};

#[derive(Debug, Clone)]
pub struct Estimate {
    pub value: f64,
    pub covered_terms: u64,
    pub workers: usize,
    pub job_distribution: Vec<usize>,
    pub dispatched: usize,
    pub concluded: usize,
    pub elapsed: Duration,
}

struct Completed {
    items: Vec<WorkItem>,
    job_distribution: Vec<usize>,
    dispatched: usize,
    concluded: usize,
}

pub struct PiEstimator {
    config: EstimatorConfig,
}

impl PiEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    pub fn estimate(&self) -> Result<Estimate, EstimateError> {
        self.config.validate()?;
        let now: Instant = Instant::now();

        let config: &EstimatorConfig = &self.config;
        let items: Vec<WorkItem> =
            partition::partition(config.total_terms, config.worker_count, config.partition)?;
        let covered_terms: u64 = items.iter().map(WorkItem::count).sum();

        let completed: Completed = match config.strategy {
            Strategy::ForkJoin => Self::fork_join(items)?,
            Strategy::Serialized => Self::serialized(items)?,
            Strategy::ScatterGather => Self::scatter_gather(items)?,
        };

        let mut pi: f64 = 0.0;
        for item in completed.items.iter() {
            pi += item.partial_sum();
        }

        let elapsed: Duration = now.elapsed();
        log::info!(
            "summed {} of {} terms on {} workers ({:?}) in {}ms",
            covered_terms,
            config.total_terms,
            config.worker_count,
            config.strategy,
            elapsed.as_millis()
        );

        Ok(Estimate {
            value: pi,
            covered_terms,
            workers: config.worker_count,
            job_distribution: completed.job_distribution,
            dispatched: completed.dispatched,
            concluded: completed.concluded,
            elapsed,
        })
    }
}

impl PiEstimator {
    fn fork_join(items: Vec<WorkItem>) -> Result<Completed, EstimateError> {
        let mut handles: Vec<(usize, thread::JoinHandle<WorkItem>)> =
            Vec::with_capacity(items.len());
        for item in items {
            let worker_id: usize = item.id();
            handles.push((worker_id, worker::spawn_item(item)?));
        }
        let dispatched: usize = handles.len();

        let mut completed: Vec<WorkItem> = Vec::with_capacity(dispatched);
        for (worker_id, handle) in handles {
            completed.push(worker::join_item(worker_id, handle)?);
        }

        Ok(Self::one_item_per_thread(completed, dispatched))
    }

    fn serialized(items: Vec<WorkItem>) -> Result<Completed, EstimateError> {
        let mut dispatched: usize = 0;
        let mut completed: Vec<WorkItem> = Vec::with_capacity(items.len());
        for item in items {
            let worker_id: usize = item.id();
            let handle: thread::JoinHandle<WorkItem> = worker::spawn_item(item)?;
            dispatched += 1;
            completed.push(worker::join_item(worker_id, handle)?);
        }

        Ok(Self::one_item_per_thread(completed, dispatched))
    }

    fn one_item_per_thread(items: Vec<WorkItem>, dispatched: usize) -> Completed {
        let concluded: usize = items.len();
        let job_distribution: Vec<usize> = vec![1; concluded];
        Completed {
            items,
            job_distribution,
            dispatched,
            concluded,
        }
    }

    fn scatter_gather(items: Vec<WorkItem>) -> Result<Completed, EstimateError> {
        let expected: usize = items.len();
        let (work_tx, work_rx): (CountedSender<WorkItem>, CountedReceiver<WorkItem>) =
            channel::counted();
        let (result_tx, result_rx): (CountedSender<WorkItem>, CountedReceiver<WorkItem>) =
            channel::counted();

        let mut workers: Vec<ThreadWorker> = Vec::with_capacity(expected);
        for id in 0..expected {
            let worker: ThreadWorker = ThreadWorker::start(id, work_rx.clone(), result_tx.clone())?;
            workers.push(worker);
        }
        drop(work_rx);
        drop(result_tx);

        for item in items {
            if work_tx.send(item).is_err() {
                return Err(EstimateError::Disconnected);
            }
        }
        let dispatched: usize = work_tx.status().sent();
        log::debug!("scattered {} work items", dispatched);
        drop(work_tx);

        let gathered: Result<Vec<WorkItem>, EstimateError> =
            GatherIter::new(&result_rx, expected).collect();

        let mut join_result: Result<(), EstimateError> = Ok(());
        for worker in workers.iter_mut() {
            if let Err(error) = worker.join() {
                if join_result.is_ok() {
                    join_result = Err(error);
                }
            }
        }
        join_result?;

        let mut completed: Vec<WorkItem> = gathered?;
        completed.sort_by_key(WorkItem::id);

        let mut job_distribution: Vec<usize> = Vec::with_capacity(workers.len());
        for worker in workers.iter() {
            log::debug!("pool worker {} computed {} items", worker.id(), worker.received());
            job_distribution.push(worker.received());
        }

        let concluded: usize = result_rx.status().received();
        log::debug!(
            "gathered {} partial sums, {} pending",
            concluded,
            result_rx.status().pending()
        );
        Ok(Completed {
            items: completed,
            job_distribution,
            dispatched,
            concluded,
        })
    }
}

/// Estimates π over `total_terms` Leibniz terms split across `worker_count` threads,
/// dropping trailing terms that don't fill a whole block.
pub fn estimate(total_terms: u64, worker_count: usize) -> Result<f64, EstimateError> {
    let config: EstimatorConfig = EstimatorConfig::new(total_terms, worker_count);
    let estimate: Estimate = PiEstimator::new(config).estimate()?;
    Ok(estimate.value)
}
