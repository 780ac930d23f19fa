//! chain-core: motor de invocación del pipeline de middleware
pub mod chain;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod model;
pub mod step;

pub use chain::{ChainBuilder, StepActivator, StepDescriptor, StepFactory, StepRegistry};
pub use engine::{CachedScope, StepBehavior, StepEngine};
pub use errors::{ChainBuildError, StepFailure, StepResult};
pub use model::{CancellationToken, PipelineContext, StepErrorRecord};
pub use step::{BoxedStep, ChainStep, PhasePredicate, PredicateTable, StepPhase, TerminalStep};
