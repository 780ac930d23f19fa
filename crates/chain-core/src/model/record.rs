//! Registro de fallo anotado en el contexto.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::step::StepPhase;

/// Entrada de la lista de errores del contexto.
///
/// El motor la crea al capturar un `StepFailure`; guarda el mensaje ya
/// renderizado (no el error original, que puede no ser `Clone`) junto con el
/// step, la fase y la marca de tiempo para diagnóstico posterior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepErrorRecord {
    /// Nombre del step que falló.
    pub step: String,
    /// Fase en la que ocurrió el fallo.
    pub phase: StepPhase,
    /// Mensaje del fallo (Display del `StepFailure` capturado).
    pub message: String,
    /// Momento de la captura (metadato, no afecta a la ejecución).
    pub at: DateTime<Utc>,
}

impl StepErrorRecord {
    pub fn new(step: impl Into<String>, phase: StepPhase, message: impl Into<String>) -> Self {
        Self { step: step.into(),
               phase,
               message: message.into(),
               at: Utc::now() }
    }
}

impl std::fmt::Display for StepErrorRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}/{}] {}", self.step, self.phase, self.message)
    }
}
