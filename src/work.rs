use std::ops::Range;

use crate::series;

#[derive(Debug, Clone, PartialEq)]
pub struct WorkItem {
    id: usize,
    start: u64,
    count: u64,
    partial_sum: f64,
}

impl WorkItem {
    pub fn new(id: usize, start: u64, count: u64) -> Self {
        let partial_sum: f64 = 0.0;
        Self {
            id,
            start,
            count,
            partial_sum,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn end(&self) -> u64 {
        self.start + self.count
    }

    pub fn range(&self) -> Range<u64> {
        self.start..self.end()
    }

    pub fn partial_sum(&self) -> f64 {
        self.partial_sum
    }

    /// Accumulates every term of this item's range into its partial sum.
    ///
    /// Called once, by the worker that owns the item.
    pub fn compute(&mut self) {
        let mut partial_sum: f64 = 0.0;
        for k in self.range() {
            partial_sum += series::term(k);
        }
        self.partial_sum = partial_sum;
    }
}
