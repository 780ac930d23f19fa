//! Configuración central del host.
//! Carga variables de entorno (.env) y expone una estructura inmutable
//! (`CONFIG`). Todas las variables tienen default para que el binario de
//! demostración corra sin preparar nada.
use once_cell::sync::Lazy;
use std::env;
use std::path::PathBuf;

/// Configuración global del host (extensible para más secciones).
pub struct HostConfig {
    /// Filtro de logging (`tracing_subscriber::EnvFilter`).
    pub log_filter: String,
    /// Fichero JSON de entrada del pipeline de demostración.
    pub input_path: PathBuf,
    /// Fichero JSON donde se persiste el payload de salida.
    pub output_path: PathBuf,
}

/// Instancia global perezosa de configuración, evaluada una sola vez.
pub static CONFIG: Lazy<HostConfig> = Lazy::new(|| {
    HostConfig { log_filter: env::var("CHAINFLOW_LOG").unwrap_or_else(|_| "info".into()),
                 input_path: env::var("CHAINFLOW_INPUT").unwrap_or_else(|_| "input.json".into())
                                                        .into(),
                 output_path: env::var("CHAINFLOW_OUTPUT").unwrap_or_else(|_| "output.json".into())
                                                          .into() }
});
