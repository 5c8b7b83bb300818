use std::sync::Arc;

use crossbeam_channel::{unbounded, Receiver, RecvError, SendError, Sender};

use crate::status::ChannelStatus;

pub struct CountedSender<T> {
    sender: Sender<T>,
    status: Arc<ChannelStatus>,
}

impl<T> CountedSender<T> {
    pub fn send(&self, value: T) -> Result<(), SendError<T>> {
        let sent_result: Result<(), SendError<T>> = self.sender.send(value);
        if sent_result.is_ok() {
            self.status.add_sent();
        }
        sent_result
    }

    pub fn status(&self) -> &Arc<ChannelStatus> {
        &self.status
    }
}

impl<T> Clone for CountedSender<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            status: self.status.clone(),
        }
    }
}

pub struct CountedReceiver<T> {
    receiver: Receiver<T>,
    status: Arc<ChannelStatus>,
}

impl<T> CountedReceiver<T> {
    pub fn recv(&self) -> Result<T, RecvError> {
        let received_result: Result<T, RecvError> = self.receiver.recv();
        if received_result.is_ok() {
            self.status.add_received();
        }
        received_result
    }

    pub fn status(&self) -> &Arc<ChannelStatus> {
        &self.status
    }
}

impl<T> Clone for CountedReceiver<T> {
    fn clone(&self) -> Self {
        Self {
            receiver: self.receiver.clone(),
            status: self.status.clone(),
        }
    }
}

/// Unbounded MPMC channel whose halves share sent/received counters.
///
/// The channel disconnects once every clone of one half is dropped.
pub fn counted<T>() -> (CountedSender<T>, CountedReceiver<T>) {
    let (sender, receiver): (Sender<T>, Receiver<T>) = unbounded();
    let status: Arc<ChannelStatus> = Arc::new(ChannelStatus::new());

    let sender: CountedSender<T> = CountedSender {
        sender,
        status: status.clone(),
    };
    let receiver: CountedReceiver<T> = CountedReceiver { receiver, status };
    (sender, receiver)
}
