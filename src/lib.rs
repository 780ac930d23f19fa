//! ChainFlow Rust Library
//!
//! Este crate actúa como el host del pipeline de middleware:
//! - Expone `config` para la configuración por variables de entorno.
//! - Expone `host` con el driver que posee la cadena y ejecuta runs.
//! - Expone `errors` con los errores de composición/arranque.
//!
//! El motor vive en `chain-core`; los steps concretos en `chain-adapters`.

pub mod config;
pub mod errors;
pub mod host;
