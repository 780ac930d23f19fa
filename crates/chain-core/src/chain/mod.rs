//! Ensamblado de cadenas: builder, descriptores y estrategia de activación.

pub mod activator;
pub mod builder;
pub mod registry;

pub use activator::{StepActivator, StepDescriptor};
pub use builder::ChainBuilder;
pub use registry::{StepFactory, StepRegistry};
