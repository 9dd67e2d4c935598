//! Per-call lifecycle of a `process` invocation.

use serde::{Deserialize, Serialize};

/// ```text
/// NotStarted → Assembling → Finishing → Complete
///      ↓            ↓
///    Failed       Failed
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssemblyState {
    NotStarted,
    Assembling,
    Finishing,
    Complete,
    Failed,
}

impl AssemblyState {
    pub fn can_transition_to(self, next: AssemblyState) -> bool {
        use AssemblyState::*;
        matches!(
            (self, next),
            (NotStarted, Assembling)
                | (NotStarted, Failed)
                | (Assembling, Finishing)
                | (Assembling, Failed)
                | (Finishing, Complete)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, AssemblyState::Complete | AssemblyState::Failed)
    }
}

impl core::fmt::Display for AssemblyState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AssemblyState::NotStarted => "not_started",
            AssemblyState::Assembling => "assembling",
            AssemblyState::Finishing => "finishing",
            AssemblyState::Complete => "complete",
            AssemblyState::Failed => "failed",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::AssemblyState::*;
    use super::*;

    const ALL: [AssemblyState; 5] = [NotStarted, Assembling, Finishing, Complete, Failed];

    #[test]
    fn happy_path_is_legal() {
        assert!(NotStarted.can_transition_to(Assembling));
        assert!(Assembling.can_transition_to(Finishing));
        assert!(Finishing.can_transition_to(Complete));
    }

    #[test]
    fn failure_only_before_finishing() {
        assert!(NotStarted.can_transition_to(Failed));
        assert!(Assembling.can_transition_to(Failed));
        assert!(!Finishing.can_transition_to(Failed));
        assert!(!Complete.can_transition_to(Failed));
    }

    #[test]
    fn terminal_states_have_no_exits() {
        for from in ALL.into_iter().filter(|s| s.is_terminal()) {
            assert!(ALL.into_iter().all(|to| !from.can_transition_to(to)), "{from} has an exit");
        }
    }

    #[test]
    fn steps_cannot_be_skipped() {
        assert!(!NotStarted.can_transition_to(Finishing));
        assert!(!NotStarted.can_transition_to(Complete));
        assert!(!Assembling.can_transition_to(Complete));
    }
}
