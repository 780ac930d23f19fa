//! Tabla de predicados fase → compuerta booleana.
//!
//! Cada nodo de la cadena lleva su propia tabla. El motor consulta la
//! compuerta de una fase justo antes de ejecutar el hook correspondiente;
//! si la fase no tiene compuerta registrada la respuesta es "siempre sí".

use std::collections::HashMap;
use std::sync::Arc;

use crate::model::PipelineContext;
use super::phase::StepPhase;

/// Compuerta de una fase: decide en runtime, mirando el contexto, si el hook
/// de esa fase debe ejecutarse.
pub type PhasePredicate = Arc<dyn Fn(&PipelineContext) -> bool + Send + Sync>;

/// Conjunto fijo de tres compuertas posibles (una por fase).
#[derive(Clone, Default)]
pub struct PredicateTable {
    gates: HashMap<StepPhase, PhasePredicate>,
}

impl PredicateTable {
    /// Tabla vacía: todas las fases permitidas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra (o reemplaza) la compuerta de una fase.
    pub fn set<F>(&mut self, phase: StepPhase, gate: F)
        where F: Fn(&PipelineContext) -> bool + Send + Sync + 'static
    {
        self.gates.insert(phase, Arc::new(gate));
    }

    /// Variante fluida de `set`, para construir tablas en una expresión.
    pub fn when<F>(mut self, phase: StepPhase, gate: F) -> Self
        where F: Fn(&PipelineContext) -> bool + Send + Sync + 'static
    {
        self.set(phase, gate);
        self
    }

    /// Evalúa la compuerta de `phase`. Fase sin compuerta ⇒ `true`.
    pub fn allows(&self, phase: StepPhase, ctx: &PipelineContext) -> bool {
        match self.gates.get(&phase) {
            Some(gate) => gate(ctx),
            None => true,
        }
    }
}

impl std::fmt::Debug for PredicateTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut fases: Vec<String> = self.gates.keys().map(|p| p.to_string()).collect();
        fases.sort();
        f.debug_struct("PredicateTable").field("gated_phases", &fases).finish()
    }
}
