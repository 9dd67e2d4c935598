//! Publishing run envelopes to observers.
//!
//! A bus fans each envelope out to every live subscription. It never feeds
//! anything back to the publisher, and envelopes published while nobody is
//! subscribed are gone.

use std::convert::Infallible;
use std::sync::mpsc::Receiver;

use pizzeria_core::RunId;

use crate::envelope::EventEnvelope;
use crate::event::Event;

/// The receiving end of a bus.
///
/// Envelopes from one publisher arrive in publication order.
#[derive(Debug)]
pub struct Subscription<E> {
    receiver: Receiver<EventEnvelope<E>>,
}

impl<E: Event> Subscription<E> {
    pub(crate) fn new(receiver: Receiver<EventEnvelope<E>>) -> Self {
        Self { receiver }
    }

    /// A subscription that never receives anything.
    pub(crate) fn closed() -> Self {
        let (_, receiver) = std::sync::mpsc::channel();
        Self::new(receiver)
    }

    /// Next envelope if one is already waiting.
    pub fn try_next(&self) -> Option<EventEnvelope<E>> {
        self.receiver.try_recv().ok()
    }

    /// Everything already delivered, without blocking.
    pub fn drain(&self) -> Vec<EventEnvelope<E>> {
        self.receiver.try_iter().collect()
    }

    /// Delivered envelopes for `run_id` only, payloads unwrapped. Envelopes
    /// of other runs are consumed and discarded.
    pub fn drain_run(&self, run_id: RunId) -> Vec<E> {
        self.receiver
            .try_iter()
            .filter(|envelope| envelope.run_id() == run_id)
            .map(EventEnvelope::into_payload)
            .collect()
    }
}

/// Where an assembly line sends its envelopes.
///
/// A failed publication is reported to the publisher, which decides whether
/// it matters.
pub trait EventBus<E: Event>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, envelope: EventEnvelope<E>) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<E>;
}

/// A bus with no observers: every envelope is dropped on the floor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unobserved;

impl<E: Event> EventBus<E> for Unobserved {
    type Error = Infallible;

    fn publish(&self, _envelope: EventEnvelope<E>) -> Result<(), Self::Error> {
        Ok(())
    }

    fn subscribe(&self) -> Subscription<E> {
        Subscription::closed()
    }
}
