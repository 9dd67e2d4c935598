//! Post-assembly finishing steps.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// A finishing step. The sequence is the same for every product and variant,
/// and no step reads or changes the product.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FinishingStep {
    Bake,
    Cut,
    Box,
}

impl FinishingStep {
    /// Run order after assembly.
    pub const SEQUENCE: [FinishingStep; 3] =
        [FinishingStep::Bake, FinishingStep::Cut, FinishingStep::Box];

    pub fn as_str(self) -> &'static str {
        match self {
            FinishingStep::Bake => "bake",
            FinishingStep::Cut => "cut",
            FinishingStep::Box => "box",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FinishingStep::Bake => "Bake for 25 minutes at 350",
            FinishingStep::Cut => "Cutting the pizza into diagonal slices",
            FinishingStep::Box => "Place pizza in official PizzaStore box",
        }
    }

    /// Nominal time the step takes on the line (not slept).
    pub fn duration(self) -> Option<Duration> {
        match self {
            FinishingStep::Bake => Some(Duration::from_secs(25 * 60)),
            FinishingStep::Cut | FinishingStep::Box => None,
        }
    }
}

impl core::fmt::Display for FinishingStep {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
