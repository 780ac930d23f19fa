//! Adaptadores de fichero: payload JSON de disco al contexto y viceversa.

use async_trait::async_trait;
use chain_core::constants::keys;
use chain_core::{ChainBuildError, PipelineContext, StepBehavior, StepResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Options comunes de los steps de fichero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileStepOptions {
    pub path: PathBuf,
}

impl FileStepOptions {
    fn validate(self, type_name: &str) -> Result<Self, ChainBuildError> {
        if self.path.as_os_str().is_empty() {
            return Err(ChainBuildError::MissingOption { type_name: type_name.into(),
                                                        option: "path".into() });
        }
        Ok(self)
    }
}

/// Lee el fichero configurado en la fase before y deja su contenido JSON bajo
/// `input_payload`. Un fichero ilegible o mal formado es un fallo de runtime
/// del step (anotado en el contexto), no un error de construcción.
#[derive(Debug)]
pub struct ReadJsonFileStep {
    options: FileStepOptions,
}

impl ReadJsonFileStep {
    pub fn new(options: FileStepOptions) -> Result<Self, ChainBuildError> {
        Ok(Self { options: options.validate("read_json_file")? })
    }
}

#[async_trait]
impl StepBehavior for ReadJsonFileStep {
    fn name(&self) -> &str {
        "read_json_file"
    }

    async fn before_next(&mut self, ctx: &mut PipelineContext) -> StepResult {
        let raw = tokio::fs::read_to_string(&self.options.path).await?;
        let payload: serde_json::Value = serde_json::from_str(&raw)?;
        tracing::debug!(path = %self.options.path.display(), "input payload loaded");
        ctx.set_item(keys::INPUT_PAYLOAD, payload);
        Ok(())
    }
}

/// Deja correr el subárbol y, en la fase after, persiste lo que haya quedado
/// bajo `output_payload`. Sin payload de salida no hay escritura (tampoco es
/// un error: el run pudo terminar sin producir resultado).
#[derive(Debug)]
pub struct WriteJsonFileStep {
    options: FileStepOptions,
}

impl WriteJsonFileStep {
    pub fn new(options: FileStepOptions) -> Result<Self, ChainBuildError> {
        Ok(Self { options: options.validate("write_json_file")? })
    }
}

#[async_trait]
impl StepBehavior for WriteJsonFileStep {
    fn name(&self) -> &str {
        "write_json_file"
    }

    async fn after_next(&mut self, ctx: &mut PipelineContext) -> StepResult {
        match ctx.item(keys::OUTPUT_PAYLOAD) {
            Some(payload) => {
                let raw = serde_json::to_string_pretty(payload)?;
                tokio::fs::write(&self.options.path, raw).await?;
                tracing::debug!(path = %self.options.path.display(), "output payload written");
            }
            None => {
                tracing::debug!(step = %self.name(), "no output payload, nothing to write");
            }
        }
        Ok(())
    }
}
