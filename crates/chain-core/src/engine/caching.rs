//! Capa de caching de items con alcance de invocación.
//!
//! `CachedScope` decora un `StepBehavior` con una lista declarativa de claves
//! del contexto que el step gestiona. En la fase before reclama esas claves
//! (las extrae del contexto hacia un mapa propio); en la fase after las
//! restaura incondicionalmente, pisando lo que el subárbol descendente haya
//! dejado bajo esos nombres.
//!
//! Efecto neto: el hook core del step puede colocar sus propios valores bajo
//! claves bien conocidas para uso exclusivo del subárbol, y al volver el
//! valor original del caller (o su ausencia) reaparece intacto. Eso hace
//! seguras las claves compartidas entre steps hermanos y entre invocaciones
//! repetidas del mismo step.
//!
//! Un core fan-out comparte un único frame de cache durante toda su
//! invocación: la restauración ocurre una sola vez, al final, no tras cada
//! descenso individual.
//!
//! Precondición dura: una sola invocación en vuelo por instancia. El mapa de
//! restauración vive en la instancia, no en la invocación; `&mut self` en
//! `invoke` hace que dos invocaciones solapadas sobre la misma instancia no
//! sean representables.

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;

use crate::errors::StepResult;
use crate::model::PipelineContext;
use crate::step::BoxedStep;
use super::behavior::StepBehavior;

/// Decorador de caching sobre un comportamiento concreto.
pub struct CachedScope<B: StepBehavior> {
    inner: B,
    /// Claves que este step reclama durante su invocación.
    cached_item_names: Vec<String>,
    /// Valores extraídos del contexto, pendientes de restaurar. Se llena al
    /// entrar en la fase before y se vacía al salir de la fase after.
    cached_items: IndexMap<String, Value>,
}

impl<B: StepBehavior> CachedScope<B> {
    /// Envuelve `inner` declarando las claves que gestiona.
    pub fn new(inner: B, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self { inner,
               cached_item_names: names.into_iter().map(Into::into).collect(),
               cached_items: IndexMap::new() }
    }

    /// Claves declaradas (sólo lectura).
    pub fn cached_item_names(&self) -> &[String] {
        &self.cached_item_names
    }
}

#[async_trait]
impl<B: StepBehavior> StepBehavior for CachedScope<B> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn before_next(&mut self, ctx: &mut PipelineContext) -> StepResult {
        for name in &self.cached_item_names {
            match ctx.items_mut().shift_remove(name) {
                Some(value) => {
                    self.cached_items.insert(name.clone(), value);
                }
                None => {
                    // Ausente no es un error: solo no hay nada que proteger
                    tracing::debug!(step = %self.inner.name(), item = %name,
                                    "cached item not present in context, skipping");
                }
            }
        }
        self.inner.before_next(ctx).await
    }

    async fn run(&mut self, ctx: &mut PipelineContext, next: &mut BoxedStep) -> StepResult {
        self.inner.run(ctx, next).await
    }

    async fn after_next(&mut self, ctx: &mut PipelineContext) -> StepResult {
        let result = self.inner.after_next(ctx).await;
        // Restauración incondicional: también cuando el hook after interno o
        // el subárbol descendente fallaron. Sobrescribe cualquier valor que
        // el descenso haya dejado bajo estas claves; una clave ausente al
        // entrar vuelve a quedar ausente.
        for name in &self.cached_item_names {
            match self.cached_items.shift_remove(name) {
                Some(value) => {
                    ctx.items_mut().insert(name.clone(), value);
                }
                None => {
                    ctx.items_mut().shift_remove(name);
                }
            }
        }
        result
    }

    async fn release(&mut self) {
        self.inner.release().await;
    }
}
