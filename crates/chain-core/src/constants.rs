//! Constantes compartidas del core.
//!
//! Además de la versión del motor, aquí viven las claves "bien conocidas" del
//! contexto. El core sólo define la mecánica de guardado/restauración
//! alrededor de estas claves; su significado semántico pertenece a los steps
//! que las usan como contrato implícito entre vecinos.

/// Versión del motor de invocación (se incluye en diagnósticos).
pub const ENGINE_VERSION: &str = "1.0.0";

/// Claves reservadas de items del contexto.
pub mod keys {
    /// Payload de entrada del run (lo coloca normalmente el primer step).
    pub const INPUT_PAYLOAD: &str = "input_payload";
    /// Payload de salida acumulado (lo coloca el step que produce resultado).
    pub const OUTPUT_PAYLOAD: &str = "output_payload";
    /// Elemento actual durante una iteración fan-out.
    pub const CURRENT_ITEM: &str = "current_item";
    /// Colección sobre la que itera un step fan-out.
    pub const BATCH_ITEMS: &str = "batch_items";
}
