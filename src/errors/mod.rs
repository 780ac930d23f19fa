//! Errores del host (composición y arranque).

pub mod host_error;

pub use host_error::HostError;
