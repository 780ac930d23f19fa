//! Driver a nivel de host.
//! Se encarga de:
//! - Poseer la cabeza de la cadena ya ensamblada.
//! - Crear un `PipelineContext` nuevo por run (sin pooling ni reutilización),
//!   invocar la cabeza una vez y descartar el contexto.
//! - Entregar un `RunReport` con los errores acumulados y el snapshot final
//!   de items para que el caller decida qué hacer.
//! - Liberar la cadena completa en el apagado.

use chain_core::{BoxedStep, CancellationToken, PipelineContext, StepErrorRecord};
use indexmap::IndexMap;
use serde_json::Value;
use uuid::Uuid;

/// Resultado observable de un run: lo que el host inspecciona al terminar.
#[derive(Debug)]
pub struct RunReport {
    /// Identificador del run (el `correlation_id` del contexto ya descartado).
    pub correlation_id: Uuid,
    /// Errores acumulados durante el run, en orden de aparición.
    pub errors: Vec<StepErrorRecord>,
    /// Snapshot de los items al terminar el run.
    pub items: IndexMap<String, Value>,
}

impl RunReport {
    /// `true` si ningún step registró fallos.
    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Dueño del ciclo de vida de la cadena: un contexto por run, un invoke por
/// contexto, inspección de errores al final.
pub struct PipelineHost {
    head: BoxedStep,
    cancellation: CancellationToken,
}

impl PipelineHost {
    pub fn new(head: BoxedStep) -> Self {
        Self { head,
               cancellation: CancellationToken::new() }
    }

    /// Handle de cancelación que comparten todos los runs de este host.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Ejecuta un run completo: contexto nuevo, items semilla, invoke de la
    /// cabeza, reporte. Los fallos de runtime nunca se propagan desde aquí;
    /// viajan en el reporte.
    pub async fn run_once(&mut self, seed: IndexMap<String, Value>) -> RunReport {
        let mut ctx = PipelineContext::with_cancellation(self.cancellation.clone());
        for (clave, valor) in seed {
            ctx.set_item(clave, valor);
        }

        let correlation_id = ctx.correlation_id();
        tracing::info!(%correlation_id, "pipeline run started");
        self.head.invoke(&mut ctx).await;
        tracing::info!(%correlation_id, failures = ctx.errors().len(), "pipeline run finished");

        RunReport { correlation_id,
                    errors: ctx.errors().to_vec(),
                    items: ctx.items().clone() }
    }

    /// Libera todos los nodos de la cadena y consume el host.
    pub async fn shutdown(mut self) {
        self.head.dispose_chain().await;
    }
}
