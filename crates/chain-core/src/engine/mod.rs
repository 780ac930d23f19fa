//! Motor de invocación y capa de caching.
//!
//! `StepEngine` implementa el protocolo de tres fases sobre un
//! `StepBehavior`; `CachedScope` añade la disciplina de reclamo/restauración
//! de claves del contexto por encima de cualquier comportamiento.

pub mod behavior;
pub mod caching;
pub mod invoker;

pub use behavior::StepBehavior;
pub use caching::CachedScope;
pub use invoker::StepEngine;
