use crossbeam_channel::RecvError;

use crate::channel::CountedReceiver;
use crate::error::EstimateError;
use crate::work::WorkItem;

/// Yields exactly `expected` computed items, or a single `Disconnected` error
/// if the senders go away first.
pub struct GatherIter<'a> {
    results: &'a CountedReceiver<WorkItem>,
    remaining: usize,
}

impl<'a> GatherIter<'a> {
    pub fn new(results: &'a CountedReceiver<WorkItem>, expected: usize) -> Self {
        Self {
            results,
            remaining: expected,
        }
    }

    pub fn has_results(&self) -> bool {
        self.remaining > 0
    }
}

impl<'a> Iterator for GatherIter<'a> {
    type Item = Result<WorkItem, EstimateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.has_results() {
            return None;
        }

        let result: Result<WorkItem, RecvError> = self.results.recv();
        match result {
            Ok(item) => {
                self.remaining -= 1;
                Some(Ok(item))
            }
            Err(_) => {
                self.remaining = 0;
                Some(Err(EstimateError::Disconnected))
            }
        }
    }
}
