use std::sync::Arc;
use std::thread;

use crate::channel::{CountedReceiver, CountedSender};
use crate::error::EstimateError;
use crate::status::WorkerStatus;
use crate::work::WorkItem;

fn thread_name(id: usize) -> String {
    format!("pi-worker-{}", id)
}

/// Moves `item` onto its own thread, which computes it and hands it back at join.
pub fn spawn_item(mut item: WorkItem) -> Result<thread::JoinHandle<WorkItem>, EstimateError> {
    let worker_id: usize = item.id();
    log::debug!("spawning worker {} over {:?}", worker_id, item.range());

    let job = move || {
        item.compute();
        item
    };
    thread::Builder::new()
        .name(thread_name(worker_id))
        .spawn(job)
        .map_err(|source| EstimateError::Spawn { worker_id, source })
}

pub fn join_item(
    worker_id: usize,
    handle: thread::JoinHandle<WorkItem>,
) -> Result<WorkItem, EstimateError> {
    match handle.join() {
        Ok(item) => {
            log::debug!("worker {} joined: {}", worker_id, item.partial_sum());
            Ok(item)
        }
        Err(_) => {
            log::error!("worker {} panicked before reporting", worker_id);
            Err(EstimateError::WorkerPanicked { worker_id })
        }
    }
}

/// Pool thread that drains work items off a shared channel until it disconnects.
pub struct ThreadWorker {
    id: usize,
    thread: Option<thread::JoinHandle<()>>,
    status: Arc<WorkerStatus>,
}

impl ThreadWorker {
    pub fn start(
        id: usize,
        work: CountedReceiver<WorkItem>,
        results: CountedSender<WorkItem>,
    ) -> Result<Self, EstimateError> {
        let status: Arc<WorkerStatus> = Arc::new(WorkerStatus::new());
        let worker_loop = Self::create_worker_loop(status.clone(), work, results);

        let thread: thread::JoinHandle<()> = thread::Builder::new()
            .name(thread_name(id))
            .spawn(worker_loop)
            .map_err(|source| EstimateError::Spawn {
                worker_id: id,
                source,
            })?;

        Ok(ThreadWorker {
            id,
            thread: Some(thread),
            status,
        })
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn received(&self) -> usize {
        self.status.received()
    }

    pub fn join(&mut self) -> Result<(), EstimateError> {
        if let Some(thread) = self.thread.take() {
            if thread.join().is_err() {
                log::error!("pool worker {} panicked", self.id);
                return Err(EstimateError::WorkerPanicked { worker_id: self.id });
            }
        }
        Ok(())
    }
}

impl ThreadWorker {
    fn create_worker_loop(
        status: Arc<WorkerStatus>,
        work: CountedReceiver<WorkItem>,
        results: CountedSender<WorkItem>,
    ) -> impl FnOnce() + Send + 'static {
        let worker_loop = move || {
            while let Ok(mut item) = work.recv() {
                status.add_received();
                item.compute();
                if results.send(item).is_err() {
                    break;
                }
            }
        };
        worker_loop
    }
}
