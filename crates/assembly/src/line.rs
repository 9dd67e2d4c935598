//! The assembly line (template orchestration).

use chrono::Utc;

use pizzeria_core::{ProductKind, RunId, Variant};
use pizzeria_events::{EventBus, EventEnvelope, Unobserved};
use pizzeria_products::Product;

use crate::error::{AssemblyError, AssemblyResult};
use crate::event::{AssemblyEnvelope, AssemblyEvent};
use crate::registry::Registry;
use crate::state::AssemblyState;
use crate::step::FinishingStep;

/// Binds a (kind, variant) pair to a finished product through a fixed
/// sequence: assemble, bake, cut, box.
///
/// The bus only observes: publication failures are logged and never change
/// the outcome of `process`.
#[derive(Debug)]
pub struct AssemblyLine<B = Unobserved> {
    registry: Registry,
    bus: B,
}

impl AssemblyLine {
    /// A line nobody is watching.
    pub fn new(registry: Registry) -> Self {
        Self::with_bus(registry, Unobserved)
    }

    /// A line over `Registry::standard()`.
    pub fn standard() -> Self {
        Self::new(Registry::standard())
    }
}

/// Bookkeeping for one `process` call.
struct Run {
    id: RunId,
    state: AssemblyState,
    sequence: u64,
}

impl Run {
    fn new() -> Self {
        Self {
            id: RunId::new(),
            state: AssemblyState::NotStarted,
            sequence: 0,
        }
    }

    fn transition(&mut self, next: AssemblyState) {
        debug_assert!(
            self.state.can_transition_to(next),
            "illegal transition {} -> {}",
            self.state,
            next
        );
        tracing::debug!(run_id = %self.id, from = %self.state, to = %next, "assembly state");
        self.state = next;
    }

    fn envelope(&mut self, event: AssemblyEvent) -> AssemblyEnvelope {
        self.sequence += 1;
        EventEnvelope::wrap(self.id, self.sequence, event)
    }
}

impl<B> AssemblyLine<B>
where
    B: EventBus<AssemblyEvent>,
{
    /// A line that publishes every run's events on `bus`.
    pub fn with_bus(registry: Registry, bus: B) -> Self {
        Self { registry, bus }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Build one product.
    ///
    /// Fails with `UnknownCombination` before anything runs if the pair is
    /// not registered, or with the builder's error if assembly fails. The
    /// finishing steps run only on a fully assembled product.
    pub fn process(&self, kind: ProductKind, variant: Variant) -> AssemblyResult<Product> {
        let mut run = Run::new();

        let (supplier, builder) = match self.registry.resolve(kind, variant) {
            Ok(resolved) => resolved,
            Err(err) => {
                run.transition(AssemblyState::Failed);
                tracing::debug!(run_id = %run.id, %kind, %variant, "no registered line");
                return Err(err);
            }
        };

        let name = format!("{} {}", variant.style(), kind.label());

        run.transition(AssemblyState::Assembling);
        tracing::info!(run_id = %run.id, %kind, %variant, "Preparing {name}");
        self.publish(
            &mut run,
            AssemblyEvent::Started {
                kind,
                variant,
                product_name: name.clone(),
                occurred_at: Utc::now(),
            },
        );

        let product = match builder.assemble(&name, supplier) {
            Ok(product) => product,
            Err(err) => {
                let stage = run.state;
                run.transition(AssemblyState::Failed);
                tracing::debug!(run_id = %run.id, error = %err, "assembly failed");
                self.publish(
                    &mut run,
                    AssemblyEvent::Failed {
                        stage,
                        reason: err.to_string(),
                        occurred_at: Utc::now(),
                    },
                );
                return Err(AssemblyError::from(err));
            }
        };

        run.transition(AssemblyState::Finishing);
        for step in FinishingStep::SEQUENCE {
            self.finish(&mut run, step);
        }

        run.transition(AssemblyState::Complete);
        self.publish(
            &mut run,
            AssemblyEvent::Completed {
                product_name: product.name().to_string(),
                occurred_at: Utc::now(),
            },
        );

        Ok(product)
    }

    /// Process each order independently; one failure does not stop the rest.
    pub fn process_all<I>(&self, orders: I) -> Vec<AssemblyResult<Product>>
    where
        I: IntoIterator<Item = (ProductKind, Variant)>,
    {
        orders
            .into_iter()
            .map(|(kind, variant)| self.process(kind, variant))
            .collect()
    }

    fn finish(&self, run: &mut Run, step: FinishingStep) {
        tracing::info!(run_id = %run.id, %step, "{}", step.description());
        self.publish(
            run,
            AssemblyEvent::StepCompleted {
                step,
                occurred_at: Utc::now(),
            },
        );
    }

    fn publish(&self, run: &mut Run, event: AssemblyEvent) {
        let envelope = run.envelope(event);
        let event_type = envelope.event_type();
        if let Err(err) = self.bus.publish(envelope) {
            tracing::warn!(run_id = %run.id, event_type, error = ?err, "failed to publish assembly event");
        }
    }
}
