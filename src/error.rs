//! # Errores del Servidor
//! src/error.rs
//!
//! Errores que pueden detener el arranque. Lo que ocurre dentro de una
//! conexión nunca llega hasta aquí: se registra en el log y la conexión se
//! cierra.

use std::io;
use thiserror::Error;

/// Configuración inválida
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("host must not be empty")]
    EmptyHost,

    #[error("directory does not exist: {0}")]
    DirectoryNotFound(String),

    #[error("not a directory: {0}")]
    NotADirectory(String),
}

/// Errores de arranque y del loop de accept
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to initialize logging: {0}")]
    Logging(String),
}
