//! Protocolo de step, fases y predicados.

pub mod phase;
pub mod predicate;
pub mod protocol;
pub mod terminal;

pub use phase::StepPhase;
pub use predicate::{PhasePredicate, PredicateTable};
pub use protocol::{BoxedStep, ChainStep};
pub use terminal::TerminalStep;
