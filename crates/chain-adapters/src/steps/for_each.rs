//! Step fan-out: una invocación del subárbol por elemento de una colección.

use async_trait::async_trait;
use chain_core::constants::keys;
use chain_core::{BoxedStep, CachedScope, ChainBuildError, PipelineContext, StepBehavior,
                 StepFailure, StepResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options del fan-out: de qué clave leer la colección y bajo qué clave
/// exponer el elemento en curso.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForEachOptions {
    pub source_key: String,
    pub item_key: String,
}

impl Default for ForEachOptions {
    fn default() -> Self {
        Self { source_key: keys::BATCH_ITEMS.into(),
               item_key: keys::CURRENT_ITEM.into() }
    }
}

/// Itera el array JSON bajo `source_key` y desciende una vez por elemento,
/// dejando el elemento en curso bajo `item_key`. Cada descenso completa todo
/// el subárbol (fases incluidas) antes de que empiece el siguiente; entre
/// iteraciones se consulta la señal de cancelación.
///
/// La clave del elemento debe montarse protegida por la capa de caching (ver
/// [`ForEachItemStep::scoped`]): un único frame para toda la invocación, con
/// restauración al final, no tras cada descenso.
#[derive(Debug)]
pub struct ForEachItemStep {
    options: ForEachOptions,
}

impl ForEachItemStep {
    pub fn new(options: ForEachOptions) -> Result<Self, ChainBuildError> {
        if options.source_key.is_empty() || options.item_key.is_empty() {
            return Err(ChainBuildError::InvalidOption { type_name: "for_each_item".into(),
                                                        option: "source_key/item_key".into(),
                                                        detail: "must not be empty".into() });
        }
        Ok(Self { options })
    }

    /// Construye el step ya envuelto en su `CachedScope`, reclamando la clave
    /// del elemento en curso.
    pub fn scoped(options: ForEachOptions) -> Result<CachedScope<Self>, ChainBuildError> {
        let item_key = options.item_key.clone();
        Ok(CachedScope::new(Self::new(options)?, [item_key]))
    }
}

#[async_trait]
impl StepBehavior for ForEachItemStep {
    fn name(&self) -> &str {
        "for_each_item"
    }

    async fn run(&mut self, ctx: &mut PipelineContext, next: &mut BoxedStep) -> StepResult {
        let elementos = match ctx.item(&self.options.source_key) {
            Some(Value::Array(v)) => v.clone(),
            Some(_) => {
                return Err(StepFailure::InvalidItem { key: self.options.source_key.clone(),
                                                      detail: "expected a JSON array".into() })
            }
            None => return Err(StepFailure::MissingItem(self.options.source_key.clone())),
        };

        tracing::debug!(step = %self.name(), count = elementos.len(), "fan-out start");
        for elemento in elementos {
            if ctx.cancellation().is_cancelled() {
                return Err(StepFailure::Cancelled);
            }
            ctx.set_item(self.options.item_key.clone(), elemento);
            next.invoke(ctx).await;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chain_core::{ChainStep, StepEngine};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    struct Sink {
        key: String,
        seen: Arc<Mutex<Vec<Value>>>,
    }

    #[async_trait]
    impl ChainStep for Sink {
        async fn invoke(&mut self, ctx: &mut PipelineContext) {
            if let Some(v) = ctx.item(&self.key) {
                self.seen.lock().unwrap().push(v.clone());
            }
        }
    }

    #[tokio::test]
    async fn iterates_custom_keys_sequentially() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let scoped = ForEachItemStep::scoped(ForEachOptions { source_key: "lote".into(),
                                                              item_key: "actual".into() }).unwrap();
        let mut node = StepEngine::with_default_predicates(scoped,
                                                           Box::new(Sink { key: "actual".into(),
                                                                           seen: seen.clone() }));

        let mut ctx = PipelineContext::new();
        ctx.set_item("lote", json!([10, 20]));
        node.invoke(&mut ctx).await;

        assert_eq!(*seen.lock().unwrap(), vec![json!(10), json!(20)]);
        assert!(ctx.item("actual").is_none(), "la clave del elemento no sobrevive");
        // La colección de origen no se reclama: sigue ahí
        assert_eq!(ctx.item("lote"), Some(&json!([10, 20])));
    }

    #[tokio::test]
    async fn non_array_source_is_a_step_failure() {
        let scoped = ForEachItemStep::scoped(ForEachOptions::default()).unwrap();
        let mut node = StepEngine::with_default_predicates(scoped,
                                                           Box::new(chain_core::TerminalStep::new()));

        let mut ctx = PipelineContext::new();
        ctx.set_item(keys::BATCH_ITEMS, json!("no soy un array"));
        node.invoke(&mut ctx).await;

        assert_eq!(ctx.errors().len(), 1);
        assert!(ctx.errors()[0].message.contains("unexpected shape"));
    }

    #[test]
    fn empty_keys_rejected_at_construction() {
        let err = ForEachItemStep::new(ForEachOptions { source_key: String::new(),
                                                        item_key: "x".into() })
            .err()
            .expect("debe rechazarse");
        assert!(matches!(err, ChainBuildError::InvalidOption { .. }));
    }
}
