//! Nodo terminal no-op.

use async_trait::async_trait;

use crate::model::PipelineContext;
use super::protocol::ChainStep;

/// El nodo más interno de toda cadena construida por el builder.
///
/// No hace nada: su única función es dar a la última posición configurada un
/// `next` válido, de modo que el protocolo de tres fases sea uniforme en
/// todos los nodos.
#[derive(Debug, Default)]
pub struct TerminalStep;

impl TerminalStep {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ChainStep for TerminalStep {
    async fn invoke(&mut self, _ctx: &mut PipelineContext) {}
}
