//! Estrategia de construcción de steps (activator).

use crate::errors::ChainBuildError;
use crate::step::BoxedStep;

/// Descriptor de una posición configurada de la cadena.
///
/// El builder trabaja únicamente con descriptores; la estrategia de
/// construcción decide cómo convertir cada uno en un nodo concreto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepDescriptor {
    /// Nombre del tipo de step (clave principal del registro).
    pub type_name: String,
    /// Clave de contexto opcional: permite registrar variantes de un mismo
    /// tipo con configuración distinta.
    pub context_key: Option<String>,
}

impl StepDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), context_key: None }
    }

    pub fn with_key(type_name: impl Into<String>, context_key: impl Into<String>) -> Self {
        Self { type_name: type_name.into(), context_key: Some(context_key.into()) }
    }
}

/// Estrategia enchufable que resuelve un descriptor a un nodo ya encadenado.
///
/// Recibe el nodo siguiente por valor (el nuevo nodo toma su ownership) y
/// cualquier otro argumento de construcción (options, predicados) lo
/// resuelve internamente. Si no puede resolver algo requerido, el ensamblado
/// entero falla inmediatamente: todavía no existe ningún contexto donde
/// acumular nada.
pub trait StepActivator {
    fn activate(&self, descriptor: &StepDescriptor, next: BoxedStep) -> Result<BoxedStep, ChainBuildError>;
}
