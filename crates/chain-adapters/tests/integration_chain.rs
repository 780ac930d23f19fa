//! Integración adaptadores + core: un pipeline de fichero a fichero.

use chain_adapters::{DelegateStep, FileStepOptions, ForEachItemStep, ForEachOptions,
                     ReadJsonFileStep, SetItemOptions, SetItemStep, WriteJsonFileStep};
use chain_core::constants::keys;
use chain_core::{ChainBuilder, ChainStep, PipelineContext, StepEngine, StepRegistry};
use serde_json::{json, Value};
use std::path::PathBuf;

fn tmp_file(nombre: &str) -> PathBuf {
    std::env::temp_dir().join(format!("chainflow-it-{}-{}.json", nombre, uuid::Uuid::new_v4()))
}

#[tokio::test]
async fn read_transform_write_pipeline() {
    // read_json_file -> transform (duplica cada número) -> write_json_file
    let entrada = tmp_file("in");
    let salida = tmp_file("out");
    tokio::fs::write(&entrada, r#"[1, 2, 3]"#).await.unwrap();

    let mut registry = StepRegistry::new();
    let ruta_in = entrada.clone();
    registry.register("read_json_file", move |_d, next| {
        let step = ReadJsonFileStep::new(FileStepOptions { path: ruta_in.clone() })?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });
    registry.register("double", |_d, next| {
        let step = DelegateStep::new("double", |ctx: &mut PipelineContext| {
            let numeros = ctx.item(keys::INPUT_PAYLOAD)
                             .and_then(Value::as_array)
                             .cloned()
                             .unwrap_or_default();
            let doblados: Vec<Value> = numeros.iter()
                                              .filter_map(Value::as_i64)
                                              .map(|n| json!(n * 2))
                                              .collect();
            ctx.set_item(keys::OUTPUT_PAYLOAD, Value::Array(doblados));
            Ok(())
        });
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });
    let ruta_out = salida.clone();
    registry.register("write_json_file", move |_d, next| {
        let step = WriteJsonFileStep::new(FileStepOptions { path: ruta_out.clone() })?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    let mut head = ChainBuilder::new().add_step("read_json_file")
                                      .add_step("double")
                                      .add_step("write_json_file")
                                      .build(&registry)
                                      .expect("la cadena debería ensamblarse");

    let mut ctx = PipelineContext::new();
    head.invoke(&mut ctx).await;

    assert!(!ctx.has_failures(), "errores: {:?}", ctx.errors());
    // El write corre en el after del nodo write, que es más interno que el
    // after del read: el payload ya estaba puesto por el core de double
    let escrito = tokio::fs::read_to_string(&salida).await.unwrap();
    let valor: Value = serde_json::from_str(&escrito).unwrap();
    assert_eq!(valor, json!([2, 4, 6]));

    head.dispose_chain().await;
    tokio::fs::remove_file(&entrada).await.ok();
    tokio::fs::remove_file(&salida).await.ok();
}

#[tokio::test]
async fn fan_out_with_sibling_set_item_reuses_well_known_key() {
    // set_item fija current_item antes del fan-out; el fan-out lo reclama,
    // lo reutiliza por elemento y al salir lo restaura para el caller.
    let mut registry = StepRegistry::new();
    registry.register("seed", |_d, next| {
        let step = SetItemStep::new(SetItemOptions { key: keys::CURRENT_ITEM.into(),
                                                     value: json!("semilla") })?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });
    registry.register("for_each_item", |_d, next| {
        let step = ForEachItemStep::scoped(ForEachOptions::default())?;
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });
    registry.register("sum", |_d, next| {
        let step = DelegateStep::new("sum", |ctx: &mut PipelineContext| {
            let actual = ctx.item(keys::CURRENT_ITEM).and_then(Value::as_i64).unwrap_or(0);
            let acumulado = ctx.item("suma").and_then(Value::as_i64).unwrap_or(0);
            ctx.set_item("suma", json!(acumulado + actual));
            Ok(())
        });
        Ok(StepEngine::with_default_predicates(step, next).boxed())
    });

    let mut head = ChainBuilder::new().add_step("seed")
                                      .add_step("for_each_item")
                                      .add_step("sum")
                                      .build(&registry)
                                      .expect("la cadena debería ensamblarse");

    let mut ctx = PipelineContext::new();
    ctx.set_item(keys::BATCH_ITEMS, json!([5, 7, 11]));
    head.invoke(&mut ctx).await;

    assert!(!ctx.has_failures(), "errores: {:?}", ctx.errors());
    assert_eq!(ctx.item("suma"), Some(&json!(23)));
    // El valor que dejó set_item antes del fan-out se restauró al salir
    assert_eq!(ctx.item(keys::CURRENT_ITEM), Some(&json!("semilla")));
}
