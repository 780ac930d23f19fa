//! Builder de la cadena de invocación.
//!
//! Acumula descriptores en orden de ejecución y ensambla la cadena en orden
//! inverso: primero el nodo terminal no-op, después cada descriptor
//! recorriendo la lista hacia atrás, de modo que cada nodo nuevo recibe como
//! `next` el construido anteriormente. Invocar la cabeza ejecuta los before
//! de fuera hacia dentro y los after de dentro hacia fuera (orden "cebolla").

use crate::errors::ChainBuildError;
use crate::step::{BoxedStep, TerminalStep};
use super::activator::{StepActivator, StepDescriptor};

/// Lista ordenada de posiciones de la cadena, previa al ensamblado.
#[derive(Debug, Default)]
pub struct ChainBuilder {
    descriptors: Vec<StepDescriptor>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un step por nombre de tipo. Conserva el orden de llamada.
    #[inline]
    pub fn add_step(mut self, type_name: impl Into<String>) -> Self {
        self.descriptors.push(StepDescriptor::new(type_name));
        self
    }

    /// Añade un step con clave de contexto (variante configurada).
    #[inline]
    pub fn add_step_with_key(mut self,
                             type_name: impl Into<String>,
                             context_key: impl Into<String>)
                             -> Self {
        self.descriptors.push(StepDescriptor::with_key(type_name, context_key));
        self
    }

    /// Descriptores acumulados hasta ahora (orden de ejecución).
    pub fn descriptors(&self) -> &[StepDescriptor] {
        &self.descriptors
    }

    /// Ensambla la cadena resolviendo cada descriptor con `activator`.
    ///
    /// Fail-fast: el primer descriptor que el activator no pueda resolver
    /// aborta el ensamblado con error; no existe aún ningún contexto donde
    /// acumular fallos. Un builder vacío produce sólo el nodo terminal.
    pub fn build(self, activator: &dyn StepActivator) -> Result<BoxedStep, ChainBuildError> {
        let mut node: BoxedStep = Box::new(TerminalStep::new());
        for descriptor in self.descriptors.into_iter().rev() {
            node = activator.activate(&descriptor, node)?;
        }
        Ok(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::StepRegistry;
    use crate::engine::{StepBehavior, StepEngine};
    use crate::model::PipelineContext;
    use crate::step::ChainStep;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Behavior mínimo que anota su paso por before/after en una traza.
    struct Traced {
        name: String,
        trace: Arc<Mutex<Vec<String>>>,
    }

    #[async_trait]
    impl StepBehavior for Traced {
        fn name(&self) -> &str {
            &self.name
        }

        async fn before_next(&mut self, _ctx: &mut PipelineContext) -> crate::errors::StepResult {
            self.trace.lock().unwrap().push(format!("{}:before", self.name));
            Ok(())
        }

        async fn after_next(&mut self, _ctx: &mut PipelineContext) -> crate::errors::StepResult {
            self.trace.lock().unwrap().push(format!("{}:after", self.name));
            Ok(())
        }
    }

    fn traced_registry(trace: Arc<Mutex<Vec<String>>>) -> StepRegistry {
        StepRegistry::new().with("traced", move |d, next| {
            let behavior = Traced { name: d.context_key.clone()
                                            .unwrap_or_else(|| d.type_name.clone()),
                                    trace: trace.clone() };
            Ok(StepEngine::with_default_predicates(behavior, next).boxed())
        })
    }

    #[tokio::test]
    async fn forward_list_order_gives_onion_execution() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let registry = traced_registry(trace.clone());

        let mut head = ChainBuilder::new().add_step_with_key("traced", "a")
                                          .add_step_with_key("traced", "b")
                                          .build(&registry)
                                          .expect("la cadena debería ensamblarse");

        let mut ctx = PipelineContext::new();
        head.invoke(&mut ctx).await;

        let vista = trace.lock().unwrap().clone();
        assert_eq!(vista, vec!["a:before", "b:before", "b:after", "a:after"]);
    }

    #[tokio::test]
    async fn empty_builder_yields_terminal_only_chain() {
        let registry = StepRegistry::new();
        let mut head = ChainBuilder::new().build(&registry).expect("cadena vacía válida");

        let mut ctx = PipelineContext::new();
        head.invoke(&mut ctx).await;
        assert!(!ctx.has_failures());
        assert!(ctx.items().is_empty());
    }

    #[test]
    fn unknown_descriptor_fails_the_whole_build() {
        let trace = Arc::new(Mutex::new(Vec::new()));
        let registry = traced_registry(trace);

        let err = ChainBuilder::new().add_step("traced")
                                     .add_step("desconocido")
                                     .build(&registry)
                                     .err()
                                     .expect("ensamblado debe fallar");
        assert_eq!(err, ChainBuildError::UnknownStepType { type_name: "desconocido".into() });
    }

    #[test]
    fn descriptors_keep_declaration_order() {
        let builder = ChainBuilder::new().add_step("uno")
                                         .add_step_with_key("dos", "k")
                                         .add_step("tres");
        let nombres: Vec<&str> = builder.descriptors().iter()
                                        .map(|d| d.type_name.as_str())
                                        .collect();
        assert_eq!(nombres, vec!["uno", "dos", "tres"]);
    }
}
