//! # Ruta de Archivos
//! src/commands/files.rs
//!
//! `/files/{nombre}`:
//! - `GET` lee el archivo: 200 con el contenido, o 404 si no se puede leer
//! - cualquier otro método escribe el body de la request: 201 con el mismo
//!   contenido de vuelta, o 404 si la escritura falla
//!
//! Un fallo de escritura también se reporta como 404, no como 5xx.

use crate::http::{Method, Request, Response, StatusCode};
use crate::storage::FileStore;
use tracing::{debug, warn};

/// Handler para `/files/{nombre}`
pub fn files_handler(req: &Request, name: &str, store: &dyn FileStore) -> Response {
    match req.method() {
        Method::GET => read_file(name, store),
        _ => write_file(name, req.body(), store),
    }
}

fn read_file(name: &str, store: &dyn FileStore) -> Response {
    match store.read(name) {
        Ok(contents) => {
            debug!(file = name, bytes = contents.len(), "file read");
            Response::octet_stream(StatusCode::Ok, contents)
        }
        Err(e) => {
            warn!(file = name, error = %e, "file read failed");
            Response::not_found()
        }
    }
}

fn write_file(name: &str, contents: &[u8], store: &dyn FileStore) -> Response {
    match store.write(name, contents) {
        Ok(()) => {
            debug!(file = name, bytes = contents.len(), "file written");
            Response::octet_stream(StatusCode::Created, contents.to_vec())
        }
        Err(e) => {
            warn!(file = name, error = %e, "file write failed");
            Response::not_found()
        }
    }
}
