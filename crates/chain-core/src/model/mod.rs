//! Modelo de datos del core: contexto, registros de error y cancelación.

pub mod cancellation;
pub mod context;
pub mod record;

pub use cancellation::CancellationToken;
pub use context::PipelineContext;
pub use record::StepErrorRecord;
