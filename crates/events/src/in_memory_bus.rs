//! In-process bus for tests, benches and the CLI.

use std::sync::{Arc, Mutex, mpsc};

use thiserror::Error;

use crate::bus::{EventBus, Subscription};
use crate::envelope::EventEnvelope;
use crate::event::Event;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InMemoryBusError {
    #[error("subscriber list lock poisoned")]
    Poisoned,
}

/// Broadcast bus backed by one channel per subscription.
///
/// Clones share the same subscriber list, so a test can keep a handle while
/// the line owns another. Dropped subscriptions are pruned on the next
/// publish.
#[derive(Debug)]
pub struct InMemoryEventBus<E> {
    subscribers: Arc<Mutex<Vec<mpsc::Sender<EventEnvelope<E>>>>>,
}

impl<E> InMemoryEventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live subscriber count as of the last publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.lock().map(|subs| subs.len()).unwrap_or(0)
    }
}

impl<E> Default for InMemoryEventBus<E> {
    fn default() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl<E> Clone for InMemoryEventBus<E> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<E: Event> EventBus<E> for InMemoryEventBus<E> {
    type Error = InMemoryBusError;

    fn publish(&self, envelope: EventEnvelope<E>) -> Result<(), Self::Error> {
        let mut subs = self.subscribers.lock().map_err(|_| InMemoryBusError::Poisoned)?;
        subs.retain(|tx| tx.send(envelope.clone()).is_ok());
        tracing::trace!(
            event_type = envelope.event_type(),
            run_id = %envelope.run_id(),
            subscribers = subs.len(),
            "published"
        );
        Ok(())
    }

    fn subscribe(&self) -> Subscription<E> {
        let (tx, rx) = mpsc::channel();
        match self.subscribers.lock() {
            Ok(mut subs) => subs.push(tx),
            Err(_) => tracing::warn!("subscribing to a poisoned bus; nothing will be delivered"),
        }
        Subscription::new(rx)
    }
}
