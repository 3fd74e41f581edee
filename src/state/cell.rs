use std::sync::mpsc::{self, Receiver, Sender};

/// An observable value cell: holds the latest value and fans every update
/// out to subscribers in emission order. Subscribing replays the current
/// value, so a consumer always starts from a complete snapshot.
pub struct StateCell<T: Clone> {
    value: T,
    subscribers: Vec<Sender<T>>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(value: T) -> Self {
        StateCell {
            value,
            subscribers: Vec::new(),
        }
    }

    /// The latest value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replace the value and notify every live subscriber.
    pub fn set(&mut self, value: T) {
        self.value = value;
        let v = &self.value;
        self.subscribers.retain(|tx| tx.send(v.clone()).is_ok());
    }

    /// Mutate the value in place, then notify.
    pub fn update(&mut self, f: impl FnOnce(&mut T)) {
        f(&mut self.value);
        let v = &self.value;
        self.subscribers.retain(|tx| tx.send(v.clone()).is_ok());
    }

    /// Subscribe: the receiver observes the current value immediately,
    /// then every subsequent `set`/`update` in order.
    pub fn subscribe(&mut self) -> Receiver<T> {
        let (tx, rx) = mpsc::channel();
        let _ = tx.send(self.value.clone());
        self.subscribers.push(tx);
        rx
    }
}
