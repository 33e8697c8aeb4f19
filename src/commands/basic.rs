//! # Comandos Básicos
//! src/commands/basic.rs
//!
//! Rutas que no tocan el filesystem:
//! - `/`: sonda, 200 sin headers ni body
//! - `/echo/{texto}`: devuelve el texto tal cual
//! - `/user-agent`: devuelve el header `User-Agent` del cliente

use crate::http::{Request, Response, StatusCode};

/// Handler para `/`
pub fn root_handler(_req: &Request) -> Response {
    Response::new(StatusCode::Ok)
}

/// Handler para `/echo/{texto}`
///
/// El parámetro es el resto del path después de `/echo/`, sin decodificar
/// ni volver a partir (`/echo/a/b` devuelve `a/b`).
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 6
///
/// abc123
/// ```
pub fn echo_handler(text: &str) -> Response {
    Response::text(StatusCode::Ok, text)
}

/// Handler para `/user-agent`
///
/// Sin header `User-Agent` responde 200 con body vacío, no es un error.
/// El nombre del header se busca exactamente así (case-sensitive).
pub fn user_agent_handler(req: &Request) -> Response {
    match req.header("User-Agent") {
        Some(agent) => Response::text(StatusCode::Ok, agent),
        None => Response::new(StatusCode::Ok),
    }
}
