//! Step que coloca un valor fijo bajo una clave del contexto.

use async_trait::async_trait;
use chain_core::{ChainBuildError, PipelineContext, StepBehavior, StepResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options del step: clave destino y valor a colocar.
///
/// Objeto de configuración plano, propiedad del step, inmutable tras la
/// construcción.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetItemOptions {
    pub key: String,
    pub value: Value,
}

/// Escribe `options.value` bajo `options.key` durante la fase before, de modo
/// que tanto el core propio como todo el subárbol descendente lo vean.
#[derive(Debug)]
pub struct SetItemStep {
    options: SetItemOptions,
}

impl SetItemStep {
    /// La clave no puede ser vacía: se valida al construir, no al invocar.
    pub fn new(options: SetItemOptions) -> Result<Self, ChainBuildError> {
        if options.key.is_empty() {
            return Err(ChainBuildError::InvalidOption { type_name: "set_item".into(),
                                                        option: "key".into(),
                                                        detail: "must not be empty".into() });
        }
        Ok(Self { options })
    }

    /// Options efectivas (sólo lectura).
    pub fn options(&self) -> &SetItemOptions {
        &self.options
    }
}

#[async_trait]
impl StepBehavior for SetItemStep {
    fn name(&self) -> &str {
        "set_item"
    }

    async fn before_next(&mut self, ctx: &mut PipelineContext) -> StepResult {
        ctx.set_item(self.options.key.clone(), self.options.value.clone());
        Ok(())
    }
}
