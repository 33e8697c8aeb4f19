//! # Acceso a Archivos
//! src/storage.rs
//!
//! La ruta `files` no toca el filesystem directamente: pasa por un
//! [`FileStore`]. En producción es un [`DirectoryStore`] que resuelve cada
//! nombre bajo el directorio configurado con `--directory`.
//!
//! Las operaciones son síncronas y bloquean el thread de la conexión que
//! las invoca. No hay locking entre conexiones: dos escrituras concurrentes
//! sobre el mismo archivo quedan a merced de la atomicidad del filesystem.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Capacidad de lectura/escritura de archivos opacos
pub trait FileStore: Send + Sync {
    /// Lee el contenido completo de `name`
    fn read(&self, name: &str) -> io::Result<Vec<u8>>;

    /// Crea o sobrescribe `name` con `contents`
    fn write(&self, name: &str, contents: &[u8]) -> io::Result<()>;
}

/// Archivos bajo un prefijo de directorio
///
/// Con prefijo vacío los nombres se resuelven relativos al directorio de
/// trabajo del proceso.
#[derive(Debug, Clone, Default)]
pub struct DirectoryStore {
    prefix: String,
}

impl DirectoryStore {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// Resuelve `<prefijo>/<name>`
    ///
    /// Los nombres absolutos o con un componente `..` se rechazan con
    /// `PermissionDenied` para que no salgan del directorio.
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::storage::DirectoryStore;
    /// use std::path::PathBuf;
    ///
    /// let store = DirectoryStore::new("/tmp/data");
    /// assert_eq!(store.resolve("a.txt").unwrap(), PathBuf::from("/tmp/data/a.txt"));
    /// assert!(store.resolve("../etc/passwd").is_err());
    /// assert!(store.resolve("/etc/passwd").is_err());
    /// ```
    pub fn resolve(&self, name: &str) -> io::Result<PathBuf> {
        if Path::new(name)
            .components()
            .any(|component| {
                matches!(
                    component,
                    Component::ParentDir | Component::RootDir | Component::Prefix(_)
                )
            })
        {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("file name escapes the directory: {}", name),
            ));
        }

        if self.prefix.is_empty() {
            Ok(PathBuf::from(name))
        } else {
            Ok(PathBuf::from(format!("{}/{}", self.prefix, name)))
        }
    }
}

impl FileStore for DirectoryStore {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        fs::read(self.resolve(name)?)
    }

    fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        fs::write(self.resolve(name)?, contents)
    }
}

/// Store en memoria para los tests de handlers y router
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    files: std::sync::Mutex<std::collections::HashMap<String, Vec<u8>>>,
    read_only: bool,
}

#[cfg(test)]
impl MemoryStore {
    pub(crate) fn with_file(self, name: &str, contents: &[u8]) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), contents.to_vec());
        self
    }

    /// Rechaza toda escritura
    pub(crate) fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub(crate) fn contents(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }
}

#[cfg(test)]
impl FileStore for MemoryStore {
    fn read(&self, name: &str) -> io::Result<Vec<u8>> {
        self.contents(name)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, name.to_string()))
    }

    fn write(&self, name: &str, contents: &[u8]) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, name.to_string()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), contents.to_vec());
        Ok(())
    }
}
