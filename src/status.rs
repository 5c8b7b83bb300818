use std::sync::atomic::AtomicUsize;

use crate::order::FETCH_ORDER;
use crate::order::LOAD_ORDER;

pub struct WorkerStatus {
    received: AtomicUsize,
}

impl WorkerStatus {
    pub fn new() -> Self {
        let received: AtomicUsize = AtomicUsize::new(0);
        Self { received }
    }

    pub fn received(&self) -> usize {
        self.received.load(LOAD_ORDER)
    }

    pub fn add_received(&self) {
        self.received.fetch_add(1, FETCH_ORDER);
    }
}

pub struct ChannelStatus {
    sent: AtomicUsize,
    received: AtomicUsize,
}

impl ChannelStatus {
    pub fn new() -> Self {
        let sent: AtomicUsize = AtomicUsize::new(0);
        let received: AtomicUsize = AtomicUsize::new(0);
        Self { sent, received }
    }

    pub fn pending(&self) -> usize {
        let sent_count: usize = self.sent();
        let received_count: usize = self.received();
        sent_count.saturating_sub(received_count)
    }

    pub fn sent(&self) -> usize {
        self.sent.load(LOAD_ORDER)
    }

    pub fn received(&self) -> usize {
        self.received.load(LOAD_ORDER)
    }

    pub fn add_sent(&self) {
        self.sent.fetch_add(1, FETCH_ORDER);
    }

    pub fn add_received(&self) {
        self.received.fetch_add(1, FETCH_ORDER);
    }
}
