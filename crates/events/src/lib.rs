//! Event mechanics for observing assembly runs.
//!
//! Events are a side channel: they report what a line did, they never feed
//! back into what it builds.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription, Unobserved};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
