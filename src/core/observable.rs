//! Last-value holder that replays its current value to new observers

use std::sync::Arc;
use tokio::sync::watch;

/// A published value shared between the state holder and its observers.
///
/// Every subscriber starts from the current value and is notified on each
/// update. A slow subscriber may skip intermediate values but always ends
/// up on the latest one.
pub struct Observable<T> {
    sender: Arc<watch::Sender<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
        }
    }
}

impl<T: Clone> Observable<T> {
    pub fn new(initial: T) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn get(&self) -> T {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.sender.subscribe()
    }

    pub(crate) fn publish(&self, value: T) {
        // send_replace stores the value even with no live receivers
        self.sender.send_replace(value);
    }
}
