//! # Configuración del Servidor
//! src/config.rs
//!
//! Se parsea una sola vez en `main` y después es de sólo lectura.
//!
//! ## Ejemplos de uso
//!
//! ```bash
//! ./route_server --directory /tmp/files
//! ./route_server --port 8080 --log-level debug
//! ```

use crate::error::ConfigError;
use clap::Parser;
use std::path::Path;

/// Configuración del servidor
#[derive(Debug, Clone, Parser)]
#[command(name = "route_server")]
#[command(about = "Servidor HTTP/1.1 mínimo: una petición por conexión")]
#[command(version)]
pub struct Config {
    /// Directorio base de la ruta /files (vacío = directorio de trabajo)
    #[arg(long, default_value = "")]
    pub directory: String,

    /// Host/IP en el que escucha
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, default_value = "4221")]
    pub port: u16,

    /// Nivel de log por defecto; RUST_LOG tiene prioridad
    #[arg(long = "log-level", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use route_server::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "127.0.0.1:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    ///
    /// Un `--directory` no vacío tiene que existir y ser un directorio.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }

        if !self.directory.is_empty() {
            let path = Path::new(&self.directory);
            if !path.exists() {
                return Err(ConfigError::DirectoryNotFound(self.directory.clone()));
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory(self.directory.clone()));
            }
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            directory: String::new(),
            host: "127.0.0.1".to_string(),
            port: 4221,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.port, 4221);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.directory.is_empty());
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_parse_matches_default() {
        let config = Config::parse_from(["route_server"]);
        let default = Config::default();

        assert_eq!(config.port, default.port);
        assert_eq!(config.host, default.host);
        assert_eq!(config.directory, default.directory);
        assert_eq!(config.log_level, default.log_level);
    }

    #[test]
    fn test_parse_directory_flag() {
        let config = Config::parse_from(["route_server", "--directory", "/tmp/files"]);
        assert_eq!(config.directory, "/tmp/files");
    }

    #[test]
    fn test_parse_port_and_host() {
        let config = Config::parse_from(["route_server", "-p", "9000", "--host", "0.0.0.0"]);
        assert_eq!(config.address(), "0.0.0.0:9000");
    }

    #[test]
    fn test_validate_success() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_validate_existing_directory() {
        let mut config = Config::default();
        config.directory = std::env::temp_dir().to_string_lossy().into_owned();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_missing_directory() {
        let mut config = Config::default();
        config.directory = "/definitely/not/a/real/dir".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DirectoryNotFound(_))
        ));
    }

    #[test]
    fn test_validate_file_as_directory() {
        let file = std::env::temp_dir().join(format!("route_server_cfg_{}", std::process::id()));
        std::fs::write(&file, b"x").unwrap();

        let mut config = Config::default();
        config.directory = file.to_string_lossy().into_owned();
        assert!(matches!(config.validate(), Err(ConfigError::NotADirectory(_))));

        let _ = std::fs::remove_file(&file);
    }

    #[test]
    fn test_validate_empty_host() {
        let mut config = Config::default();
        config.host = String::new();
        assert!(matches!(config.validate(), Err(ConfigError::EmptyHost)));
    }
}
