//! Motor de invocación: protocolo de tres fases sobre un `StepBehavior`.

use async_trait::async_trait;

use crate::model::PipelineContext;
use crate::step::{BoxedStep, ChainStep, PredicateTable, StepPhase};
use super::behavior::StepBehavior;

/// Nodo de la cadena: un comportamiento + su tabla de predicados + el
/// siguiente nodo (ownership exclusivo, cadena acíclica por construcción).
///
/// Protocolo por invocación, siempre lineal:
/// 1. Si el predicado `BeforeNext` lo permite, corre el hook before. Un `Err`
///    se anota en el contexto y la fase core ya no se ejecuta.
/// 2. Si no hubo fallo y el predicado `Next` lo permite, corre el hook core
///    (que por defecto delega en el siguiente nodo). Un `Err` se anota en el
///    contexto; si el hook ya había delegado antes de fallar, ese descenso
///    quedó completo.
/// 3. Pase lo que pase arriba (los fallos de hooks son `Result` y nunca se
///    propagan, así que este punto se alcanza en todo camino de salida), si
///    el predicado `AfterNext` lo permite, corre el hook after. Su propio
///    `Err` también se anota en el contexto.
pub struct StepEngine<B: StepBehavior> {
    behavior: B,
    predicates: PredicateTable,
    next: BoxedStep,
}

impl<B: StepBehavior> StepEngine<B> {
    /// Crea un nodo con tabla de predicados explícita.
    ///
    /// Todos los colaboradores entran por valor: no hay estados nulos que
    /// validar en runtime.
    pub fn new(behavior: B, predicates: PredicateTable, next: BoxedStep) -> Self {
        Self { behavior,
               predicates,
               next }
    }

    /// Crea un nodo con la tabla por defecto (todas las fases permitidas).
    pub fn with_default_predicates(behavior: B, next: BoxedStep) -> Self {
        Self::new(behavior, PredicateTable::new(), next)
    }

    /// Empaqueta el nodo para colocarlo en una cadena.
    pub fn boxed(self) -> BoxedStep
        where B: 'static
    {
        Box::new(self)
    }
}

#[async_trait]
impl<B: StepBehavior> ChainStep for StepEngine<B> {
    async fn invoke(&mut self, ctx: &mut PipelineContext) {
        let mut failed = false;

        if self.predicates.allows(StepPhase::BeforeNext, ctx) {
            if let Err(e) = self.behavior.before_next(ctx).await {
                tracing::warn!(step = %self.behavior.name(), phase = %StepPhase::BeforeNext,
                               error = %e, "step hook failed");
                ctx.record_failure(self.behavior.name(), StepPhase::BeforeNext, e);
                failed = true;
            }
        }

        if !failed && self.predicates.allows(StepPhase::Next, ctx) {
            if let Err(e) = self.behavior.run(ctx, &mut self.next).await {
                tracing::warn!(step = %self.behavior.name(), phase = %StepPhase::Next,
                               error = %e, "step hook failed");
                ctx.record_failure(self.behavior.name(), StepPhase::Next, e);
            }
        }

        // Equivalente a un finally: los hooks no propagan, así que la fase
        // after corre en todo camino de salida salvo veto de su predicado.
        if self.predicates.allows(StepPhase::AfterNext, ctx) {
            if let Err(e) = self.behavior.after_next(ctx).await {
                tracing::warn!(step = %self.behavior.name(), phase = %StepPhase::AfterNext,
                               error = %e, "step hook failed");
                ctx.record_failure(self.behavior.name(), StepPhase::AfterNext, e);
            }
        }
    }

    async fn dispose(&mut self) {
        self.behavior.release().await;
    }

    async fn dispose_chain(&mut self) {
        self.dispose().await;
        self.next.dispose_chain().await;
    }
}
