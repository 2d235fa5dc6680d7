//! Fan-out of alerts to subscribers over `std::sync::mpsc` channels

use std::sync::mpsc;
use std::sync::Mutex;

use super::policy::BudgetAlert;

/// Broadcasts alerts to any number of receivers
#[derive(Default)]
pub struct AlertBus {
    subscribers: Mutex<Vec<mpsc::Sender<BudgetAlert>>>,
}

impl AlertBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new subscriber
    ///
    /// Only alerts broadcast after this call are received. Dropping the
    /// receiver unsubscribes.
    pub fn subscribe(&self) -> mpsc::Receiver<BudgetAlert> {
        let (sender, receiver) = mpsc::channel();
        match self.subscribers.lock() {
            Ok(mut subscribers) => subscribers.push(sender),
            Err(poisoned) => poisoned.into_inner().push(sender),
        }
        receiver
    }

    /// Send `alert` to every live subscriber, dropping disconnected ones
    ///
    /// Returns the number of subscribers that received it.
    pub fn broadcast(&self, alert: &BudgetAlert) -> usize {
        let mut subscribers = match self.subscribers.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        subscribers.retain(|sender| sender.send(alert.clone()).is_ok());
        subscribers.len()
    }

    pub fn subscriber_count(&self) -> usize {
        match self.subscribers.lock() {
            Ok(subscribers) => subscribers.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }
}
