//! # Logging
//! src/logging.rs
//!
//! Logs estructurados a consola con `tracing`. `RUST_LOG` tiene prioridad
//! sobre el nivel que llega por `--log-level`.

use crate::error::ServerError;
use tracing_subscriber::{fmt, EnvFilter};

/// Instala el subscriber global
///
/// Llamarlo dos veces retorna `ServerError::Logging` en vez de hacer panic.
pub fn init(level: &str) -> Result<(), ServerError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_thread_names(true)
        .try_init()
        .map_err(|e| ServerError::Logging(e.to_string()))
}
