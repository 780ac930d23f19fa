//! Errores específicos del core.
//!
//! Dos familias con políticas distintas:
//! - `ChainBuildError`: errores estructurales de ensamblado. Se devuelven
//!   inmediatamente desde `build` (fail-fast); nunca se acumulan porque en ese
//!   momento todavía no existe ningún contexto.
//! - `StepFailure`: fallos de runtime dentro de un hook. El motor los captura
//!   y los anota en la lista de errores del contexto; nunca se propagan al
//!   caller de `invoke`.

use thiserror::Error;

/// Fallo de runtime producido por un hook de un step.
#[derive(Debug, Error)]
pub enum StepFailure {
    #[error("missing context item '{0}'")]
    MissingItem(String),
    #[error("context item '{key}' has unexpected shape: {detail}")]
    InvalidItem { key: String, detail: String },
    #[error("step was cancelled")]
    Cancelled,
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Other(String),
}

impl StepFailure {
    /// Atajo para fallos de texto libre.
    pub fn other(msg: impl Into<String>) -> Self {
        StepFailure::Other(msg.into())
    }
}

/// Resultado estándar de los hooks de un step.
pub type StepResult = Result<(), StepFailure>;

/// Errores de ensamblado de la cadena (construcción, no ejecución).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ChainBuildError {
    #[error("no factory registered for step type '{type_name}'")]
    UnknownStepType { type_name: String },
    #[error("no factory registered for step type '{type_name}' with context key '{context_key}'")]
    UnknownKeyedStepType { type_name: String, context_key: String },
    #[error("step '{type_name}' is missing required option '{option}'")]
    MissingOption { type_name: String, option: String },
    #[error("step '{type_name}' rejected option '{option}': {detail}")]
    InvalidOption { type_name: String, option: String, detail: String },
    #[error("internal: {0}")]
    Internal(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_failure_formats() {
        let e = StepFailure::MissingItem("input_payload".into());
        assert_eq!(e.to_string(), "missing context item 'input_payload'");

        let e = StepFailure::other("algo malo");
        assert_eq!(e.to_string(), "algo malo");
    }

    #[test]
    fn step_failure_from_io() {
        let io = std::io::Error::other("falló IO");
        let e: StepFailure = io.into();
        assert_eq!(e.to_string(), "io: falló IO");
    }

    #[test]
    fn build_error_formats() {
        let e = ChainBuildError::UnknownStepType { type_name: "zip".into() };
        assert_eq!(e.to_string(), "no factory registered for step type 'zip'");

        let e = ChainBuildError::MissingOption { type_name: "read_file".into(), option: "path".into() };
        assert_eq!(e.to_string(), "step 'read_file' is missing required option 'path'");
    }
}
