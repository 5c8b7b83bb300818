use std::fmt;
use std::io;

/// Everything that can stop an estimate from being produced.
#[derive(Debug)]
pub enum EstimateError {
    /// The worker count was zero, rejected before any thread is launched.
    InvalidWorkerCount(usize),
    /// More workers were requested than the estimator will launch.
    TooManyWorkers { requested: usize, max: usize },
    /// The OS refused to spawn a worker thread.
    Spawn { worker_id: usize, source: io::Error },
    /// A worker thread panicked before handing back its partial sum.
    WorkerPanicked { worker_id: usize },
    /// The pool channels closed before every partial sum was gathered.
    Disconnected,
}

impl fmt::Display for EstimateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWorkerCount(count) => {
                write!(f, "invalid worker count: {count} (must be at least 1)")
            }
            Self::TooManyWorkers { requested, max } => {
                write!(f, "too many workers: {requested} (at most {max})")
            }
            Self::Spawn { worker_id, source } => {
                write!(f, "failed to spawn worker {worker_id}: {source}")
            }
            Self::WorkerPanicked { worker_id } => write!(f, "worker {worker_id} panicked"),
            Self::Disconnected => write!(f, "worker channel disconnected before all results arrived"),
        }
    }
}

impl std::error::Error for EstimateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Spawn { source, .. } => Some(source),
            _ => None,
        }
    }
}
