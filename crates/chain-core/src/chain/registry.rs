//! Registro de fábricas de steps: el activator por defecto.
//!
//! Mantiene fábricas indexadas por nombre de tipo, con registro opcional por
//! (tipo, clave de contexto). La búsqueda prueba primero la variante con
//! clave; si el descriptor no trae clave, o no hay variante registrada para
//! esa clave, cae al registro por tipo. Descriptor sin fábrica ⇒ error de
//! ensamblado.

use std::collections::HashMap;

use crate::errors::ChainBuildError;
use crate::step::BoxedStep;
use super::activator::{StepActivator, StepDescriptor};

/// Fábrica de un step: recibe el descriptor y el nodo siguiente, devuelve el
/// nodo construido (o un error fail-fast de construcción).
pub type StepFactory =
    Box<dyn Fn(&StepDescriptor, BoxedStep) -> Result<BoxedStep, ChainBuildError> + Send + Sync>;

/// Activator respaldado por un mapa de fábricas.
#[derive(Default)]
pub struct StepRegistry {
    by_type: HashMap<String, StepFactory>,
    by_type_and_key: HashMap<(String, String), StepFactory>,
}

impl StepRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra la fábrica de un tipo de step.
    pub fn register<F>(&mut self, type_name: impl Into<String>, factory: F)
        where F: Fn(&StepDescriptor, BoxedStep) -> Result<BoxedStep, ChainBuildError>
                     + Send + Sync + 'static
    {
        self.by_type.insert(type_name.into(), Box::new(factory));
    }

    /// Registra una variante de un tipo para una clave de contexto concreta.
    /// La variante con clave tiene prioridad sobre el registro por tipo.
    pub fn register_keyed<F>(&mut self,
                             type_name: impl Into<String>,
                             context_key: impl Into<String>,
                             factory: F)
        where F: Fn(&StepDescriptor, BoxedStep) -> Result<BoxedStep, ChainBuildError>
                     + Send + Sync + 'static
    {
        self.by_type_and_key.insert((type_name.into(), context_key.into()), Box::new(factory));
    }

    /// Variante fluida de `register`.
    pub fn with<F>(mut self, type_name: impl Into<String>, factory: F) -> Self
        where F: Fn(&StepDescriptor, BoxedStep) -> Result<BoxedStep, ChainBuildError>
                     + Send + Sync + 'static
    {
        self.register(type_name, factory);
        self
    }
}

impl StepActivator for StepRegistry {
    fn activate(&self, descriptor: &StepDescriptor, next: BoxedStep) -> Result<BoxedStep, ChainBuildError> {
        if let Some(key) = &descriptor.context_key {
            let compuesto = (descriptor.type_name.clone(), key.clone());
            if let Some(factory) = self.by_type_and_key.get(&compuesto) {
                return factory(descriptor, next);
            }
        }
        match self.by_type.get(&descriptor.type_name) {
            Some(factory) => factory(descriptor, next),
            None => match &descriptor.context_key {
                Some(key) => Err(ChainBuildError::UnknownKeyedStepType {
                    type_name: descriptor.type_name.clone(),
                    context_key: key.clone(),
                }),
                None => Err(ChainBuildError::UnknownStepType {
                    type_name: descriptor.type_name.clone(),
                }),
            },
        }
    }
}
