use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use pizzeria_core::RunId;

use crate::event::Event;

/// An event tagged with the run that produced it.
///
/// `sequence_number` starts at 1 and increases by one per event within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventEnvelope<E> {
    event_id: Uuid,
    run_id: RunId,
    sequence_number: u64,
    event_type: &'static str,
    payload: E,
}

impl<E: Event> EventEnvelope<E> {
    /// Wrap `payload` with a fresh time-ordered event id.
    pub fn wrap(run_id: RunId, sequence_number: u64, payload: E) -> Self {
        Self {
            event_id: Uuid::now_v7(),
            run_id,
            sequence_number,
            event_type: payload.event_type(),
            payload,
        }
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn run_id(&self) -> RunId {
        self.run_id
    }

    pub fn sequence_number(&self) -> u64 {
        self.sequence_number
    }

    pub fn event_type(&self) -> &'static str {
        self.event_type
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.payload.occurred_at()
    }

    pub fn payload(&self) -> &E {
        &self.payload
    }

    pub fn into_payload(self) -> E {
        self.payload
    }

    /// Whether both envelopes came from the same `process` call.
    pub fn same_run(&self, other: &Self) -> bool {
        self.run_id == other.run_id
    }
}
