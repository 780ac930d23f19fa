//! Señal de cancelación cooperativa.
//!
//! El motor nunca aborta un hook por la fuerza: los steps de larga duración
//! consultan voluntariamente esta señal (por ejemplo entre iteraciones de un
//! fan-out) y deciden cortar devolviendo `StepFailure::Cancelled`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Flag compartido entre el host y los steps de un mismo run.
///
/// Los clones comparten el mismo estado interno; cancelar uno cancela todos.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    flag: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Crea un token sin cancelar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marca el run como cancelado. Idempotente.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    /// Devuelve `true` si alguien pidió cancelar.
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}
