use chain_core::ChainBuildError;
use thiserror::Error;

/// Errores del composition root: configuración y ensamblado.
///
/// Distintos de los fallos de runtime de los steps, que nunca llegan aquí:
/// esos quedan acumulados en el contexto y se inspeccionan en el `RunReport`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("Error de configuración: {0}")]
    Config(String),
    #[error("Error de ensamblado: {0}")]
    Build(#[from] ChainBuildError),
    #[error("Error en IO: {0}")]
    Io(#[from] std::io::Error),
}
