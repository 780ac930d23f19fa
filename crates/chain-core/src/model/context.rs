//! Contexto de ejecución de un run del pipeline.
//!
//! `PipelineContext` es un contenedor de datos puro: items nombrados, lista
//! de errores append-only y señal de cancelación. No contiene lógica de
//! orquestación; el motor lo consume por `&mut` pero no lo posee.
//!
//! Ciclo de vida: el host lo crea inmediatamente antes de un run, lo pasa al
//! nodo cabeza de la cadena y lo descarta al terminar. No hay pooling ni
//! reutilización entre runs.

use indexmap::IndexMap;
use serde_json::Value;
use uuid::Uuid;

use super::cancellation::CancellationToken;
use super::record::StepErrorRecord;
use crate::errors::StepFailure;
use crate::step::StepPhase;

/// Bolsa mutable de valores nombrados + errores acumulados + cancelación.
#[derive(Debug)]
pub struct PipelineContext {
    /// Identificador estable del run, asignado en la creación.
    correlation_id: Uuid,
    /// Items nombrados. El orden de inserción se conserva (útil para
    /// diagnóstico); las claves son únicas.
    items: IndexMap<String, Value>,
    /// Lista append-only de fallos capturados durante el run. Nunca se vacía
    /// mientras el run está en curso.
    errors: Vec<StepErrorRecord>,
    /// Señal cooperativa consultada voluntariamente por steps largos.
    cancellation: CancellationToken,
}

impl PipelineContext {
    /// Crea un contexto nuevo con token de cancelación propio.
    pub fn new() -> Self {
        Self::with_cancellation(CancellationToken::new())
    }

    /// Crea un contexto compartiendo un token externo (el host se queda con
    /// un clon para poder cancelar desde fuera).
    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self { correlation_id: Uuid::new_v4(),
               items: IndexMap::new(),
               errors: Vec::new(),
               cancellation }
    }

    /// Identificador del run (sólo lectura).
    pub fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }

    /// Inserta o reemplaza un item.
    pub fn set_item(&mut self, key: impl Into<String>, value: Value) {
        self.items.insert(key.into(), value);
    }

    /// Consulta un item sin extraerlo.
    pub fn item(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    /// Extrae un item, eliminándolo del contexto.
    pub fn take_item(&mut self, key: &str) -> Option<Value> {
        self.items.shift_remove(key)
    }

    /// Acceso de sólo lectura al mapa completo.
    pub fn items(&self) -> &IndexMap<String, Value> {
        &self.items
    }

    /// Acceso mutable al mapa completo (lo usa la capa de caching).
    pub fn items_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.items
    }

    /// Anota un fallo de runtime. Llamado por el motor al capturar el `Err`
    /// de un hook; también puede usarlo un step que quiera registrar un fallo
    /// parcial sin abortar su propia fase.
    pub fn record_failure(&mut self, step: &str, phase: StepPhase, failure: StepFailure) {
        self.errors.push(StepErrorRecord::new(step, phase, failure.to_string()));
    }

    /// Errores acumulados hasta el momento (visibles para todos los steps
    /// que siguen en la pila de llamada).
    pub fn errors(&self) -> &[StepErrorRecord] {
        &self.errors
    }

    /// `true` si algún step registró un fallo durante el run.
    pub fn has_failures(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Señal de cancelación del run.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }
}

impl Default for PipelineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn items_preserve_insertion_order() {
        let mut ctx = PipelineContext::new();
        ctx.set_item("b", json!(2));
        ctx.set_item("a", json!(1));
        ctx.set_item("c", json!(3));

        let claves: Vec<&str> = ctx.items().keys().map(|k| k.as_str()).collect();
        assert_eq!(claves, vec!["b", "a", "c"]);
    }

    #[test]
    fn take_item_removes_entry() {
        let mut ctx = PipelineContext::new();
        ctx.set_item("x", json!(5));

        assert_eq!(ctx.take_item("x"), Some(json!(5)));
        assert!(ctx.item("x").is_none());
        assert_eq!(ctx.take_item("x"), None);
    }

    #[test]
    fn errors_accumulate_in_order() {
        let mut ctx = PipelineContext::new();
        assert!(!ctx.has_failures());

        ctx.record_failure("a", StepPhase::BeforeNext, StepFailure::other("uno"));
        ctx.record_failure("b", StepPhase::Next, StepFailure::other("dos"));

        assert!(ctx.has_failures());
        let mensajes: Vec<&str> = ctx.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(mensajes, vec!["uno", "dos"]);
        assert_eq!(ctx.errors()[0].step, "a");
        assert_eq!(ctx.errors()[1].phase, StepPhase::Next);
    }

    #[test]
    fn correlation_id_is_stable() {
        let ctx = PipelineContext::new();
        let id = ctx.correlation_id();
        assert_eq!(ctx.correlation_id(), id);
    }
}
