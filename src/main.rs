//! Binario de demostración: ensambla y ejecuta un pipeline de fichero a
//! fichero (leer JSON → fan-out sobre los elementos → persistir resultado).
//!
//! Variables de entorno (todas opcionales, ver `config`):
//! - `CHAINFLOW_LOG`: filtro de logging (default "info").
//! - `CHAINFLOW_INPUT` / `CHAINFLOW_OUTPUT`: rutas de entrada/salida.

use chain_adapters::{DelegateStep, FileStepOptions, ForEachItemStep, ForEachOptions,
                     ReadJsonFileStep, WriteJsonFileStep};
use chain_core::constants::keys;
use chain_core::{ChainBuilder, PipelineContext, StepEngine, StepRegistry};
use chainflow_rust::config::CONFIG;
use chainflow_rust::errors::HostError;
use chainflow_rust::host::PipelineHost;
use indexmap::IndexMap;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

fn build_registry() -> StepRegistry {
    let mut registry = StepRegistry::new();

    registry.register("read_json_file", |_d, next| {
        let step = ReadJsonFileStep::new(FileStepOptions { path: CONFIG.input_path.clone() })?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    // El payload de entrada pasa a ser la colección del fan-out
    registry.register("stage_batch", |_d, next| {
        let step = DelegateStep::new("stage_batch", |ctx: &mut PipelineContext| {
            if let Some(payload) = ctx.take_item(keys::INPUT_PAYLOAD) {
                ctx.set_item(keys::BATCH_ITEMS, payload);
            }
            Ok(())
        });
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    registry.register("for_each_item", |_d, next| {
        let step = ForEachItemStep::scoped(ForEachOptions::default())?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    // Suma acumulada sobre output_payload
    registry.register("accumulate", |_d, next| {
        let step = DelegateStep::new("accumulate", |ctx: &mut PipelineContext| {
            let actual = ctx.item(keys::CURRENT_ITEM).and_then(Value::as_i64).unwrap_or(0);
            let acumulado = ctx.item(keys::OUTPUT_PAYLOAD)
                               .and_then(|v| v.get("total"))
                               .and_then(Value::as_i64)
                               .unwrap_or(0);
            ctx.set_item(keys::OUTPUT_PAYLOAD, json!({ "total": acumulado + actual }));
            Ok(())
        });
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    registry.register("write_json_file", |_d, next| {
        let step = WriteJsonFileStep::new(FileStepOptions { path: CONFIG.output_path.clone() })?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    registry
}

#[tokio::main]
async fn main() -> Result<(), HostError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(CONFIG.log_filter.clone()))
                             .init();

    let registry = build_registry();
    // Orden de ejecución = orden de declaración; write va antes del fan-out
    // en la lista para que su after (el que persiste) corra el último de los
    // dos y vea el acumulado completo.
    let head = ChainBuilder::new().add_step("read_json_file")
                                  .add_step("stage_batch")
                                  .add_step("write_json_file")
                                  .add_step("for_each_item")
                                  .add_step("accumulate")
                                  .build(&registry)?;

    let mut host = PipelineHost::new(head);
    let report = host.run_once(IndexMap::new()).await;

    if report.succeeded() {
        tracing::info!(run = %report.correlation_id, "pipeline completed without failures");
    } else {
        for error in &report.errors {
            tracing::error!(run = %report.correlation_id, %error, "step failure");
        }
    }

    host.shutdown().await;
    Ok(())
}
