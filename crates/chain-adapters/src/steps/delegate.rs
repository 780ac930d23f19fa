//! Step delegado: un closure como hook core.

use async_trait::async_trait;
use chain_core::{BoxedStep, PipelineContext, StepBehavior, StepResult};

/// Ejecuta el closure sobre el contexto y después delega exactamente una vez.
///
/// Pensado para tests y para pipelines construidos ad-hoc donde no compensa
/// un tipo con nombre propio. El closure corre antes de la delegación; si
/// devuelve `Err` el descenso no ocurre y el fallo queda anotado por el motor.
pub struct DelegateStep<F> {
    name: String,
    action: F,
}

impl<F> DelegateStep<F>
    where F: FnMut(&mut PipelineContext) -> StepResult + Send
{
    pub fn new(name: impl Into<String>, action: F) -> Self {
        Self { name: name.into(), action }
    }
}

#[async_trait]
impl<F> StepBehavior for DelegateStep<F>
    where F: FnMut(&mut PipelineContext) -> StepResult + Send
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&mut self, ctx: &mut PipelineContext, next: &mut BoxedStep) -> StepResult {
        (self.action)(ctx)?;
        next.invoke(ctx).await;
        Ok(())
    }
}
