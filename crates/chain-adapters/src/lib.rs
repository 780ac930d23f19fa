//! chain-adapters: steps concretos sobre el motor de invocación
//!
//! Este crate provee:
//! - `DelegateStep`: envuelve un closure como hook core (caballo de batalla
//!   de tests y pipelines ad-hoc).
//! - `SetItemStep`: coloca un valor configurado bajo una clave en la fase
//!   before.
//! - `ForEachItemStep`: fan-out secuencial sobre una colección JSON, con la
//!   clave del elemento en curso protegida por la capa de caching.
//! - `ReadJsonFileStep` / `WriteJsonFileStep`: adaptadores de fichero que
//!   mueven un payload JSON entre disco y las claves reservadas del contexto.
//!
//! Nota: el core sólo conoce la mecánica de fases y de caching; la semántica
//! de cada clave (qué significa `input_payload`, etc.) vive aquí, en los
//! steps que la usan como contrato entre vecinos.

pub mod steps;

pub use steps::delegate::DelegateStep;
pub use steps::for_each::{ForEachItemStep, ForEachOptions};
pub use steps::json_file::{FileStepOptions, ReadJsonFileStep, WriteJsonFileStep};
pub use steps::set_item::{SetItemOptions, SetItemStep};
