use serde::{Deserialize, Serialize};

/// One of the three sub-steps of a single node invocation.
///
/// The invocation is always linear: `BeforeNext` then `Next` then
/// `AfterNext`. The core phase may descend into the continuation zero, one or
/// many times, but each descent is a complete invocation of the next node's
/// own three phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepPhase {
    /// Preparation hook, runs before any delegation.
    BeforeNext,
    /// Core hook; default behavior delegates once to the next node.
    Next,
    /// Reaction hook, guaranteed to run on every exit path (gated only by its
    /// own predicate).
    AfterNext,
}

impl std::fmt::Display for StepPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            StepPhase::BeforeNext => "before_next",
            StepPhase::Next => "next",
            StepPhase::AfterNext => "after_next",
        };
        write!(f, "{}", s)
    }
}
