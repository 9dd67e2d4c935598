//! Events published by an assembly line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pizzeria_core::{ProductKind, Variant};
use pizzeria_events::{Event, EventEnvelope};

use crate::state::AssemblyState;
use crate::step::FinishingStep;

pub type AssemblyEnvelope = EventEnvelope<AssemblyEvent>;

/// What happened during one `process` call.
///
/// An unknown combination publishes nothing: the run never leaves
/// `NotStarted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AssemblyEvent {
    Started {
        kind: ProductKind,
        variant: Variant,
        product_name: String,
        occurred_at: DateTime<Utc>,
    },
    StepCompleted {
        step: FinishingStep,
        occurred_at: DateTime<Utc>,
    },
    Completed {
        product_name: String,
        occurred_at: DateTime<Utc>,
    },
    Failed {
        /// State the run was in when it failed.
        stage: AssemblyState,
        reason: String,
        occurred_at: DateTime<Utc>,
    },
}

impl AssemblyEvent {
    /// State the run is in once this event has been published.
    pub fn state(&self) -> AssemblyState {
        match self {
            AssemblyEvent::Started { .. } => AssemblyState::Assembling,
            AssemblyEvent::StepCompleted { .. } => AssemblyState::Finishing,
            AssemblyEvent::Completed { .. } => AssemblyState::Complete,
            AssemblyEvent::Failed { .. } => AssemblyState::Failed,
        }
    }

    pub fn step(&self) -> Option<FinishingStep> {
        match self {
            AssemblyEvent::StepCompleted { step, .. } => Some(*step),
            _ => None,
        }
    }
}

impl Event for AssemblyEvent {
    fn event_type(&self) -> &'static str {
        match self {
            AssemblyEvent::Started { .. } => "assembly.run.started",
            AssemblyEvent::StepCompleted { .. } => "assembly.step.completed",
            AssemblyEvent::Completed { .. } => "assembly.run.completed",
            AssemblyEvent::Failed { .. } => "assembly.run.failed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            AssemblyEvent::Started { occurred_at, .. }
            | AssemblyEvent::StepCompleted { occurred_at, .. }
            | AssemblyEvent::Completed { occurred_at, .. }
            | AssemblyEvent::Failed { occurred_at, .. } => *occurred_at,
        }
    }
}
