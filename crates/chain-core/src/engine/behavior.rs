//! Hooks de comportamiento de un step concreto.
//!
//! Un `StepBehavior` define QUÉ hace un step en cada fase; el `StepEngine`
//! define CÓMO se ejecutan esas fases (orden, compuertas, captura de fallos).
//! Los steps concretos implementan este trait y se montan sobre el motor, con
//! o sin la capa de caching por medio.

use async_trait::async_trait;

use crate::errors::StepResult;
use crate::model::PipelineContext;
use crate::step::BoxedStep;

/// Hooks de las tres fases más el hook de liberación de recursos.
///
/// Todos los hooks tienen implementación por defecto; un step mínimo sólo
/// necesita declarar su nombre. El hook core recibe el siguiente nodo y puede
/// descender en él cero, una o varias veces (fan-out); cada descenso es una
/// invocación completa y secuencial, nunca intercalada.
#[async_trait]
pub trait StepBehavior: Send {
    /// Nombre estable del step, usado en logs y registros de error.
    fn name(&self) -> &str;

    /// Fase before: preparación previa a la delegación. Por defecto no-op.
    async fn before_next(&mut self, _ctx: &mut PipelineContext) -> StepResult {
        Ok(())
    }

    /// Fase core. Por defecto delega exactamente una vez en `next`.
    async fn run(&mut self, ctx: &mut PipelineContext, next: &mut BoxedStep) -> StepResult {
        next.invoke(ctx).await;
        Ok(())
    }

    /// Fase after: reacción una vez que todo el subárbol descendente terminó.
    /// Por defecto no-op.
    async fn after_next(&mut self, _ctx: &mut PipelineContext) -> StepResult {
        Ok(())
    }

    /// Liberación de recursos propios (el análogo del hook de dispose).
    async fn release(&mut self) {}
}
