//! # Construcción de Respuestas HTTP
//!
//! API para construir respuestas y convertirlas a los bytes exactos que
//! se escriben en el socket.
//!
//! ## Formato
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 6\r\n
//! \r\n
//! abc123
//! ```
//!
//! Sin headers, la línea vacía sigue inmediatamente a la status line:
//! `HTTP/1.1 200 OK\r\n\r\n`.
//!
//! ## Ejemplo de uso
//!
//! ```
//! use route_server::http::{Response, StatusCode};
//!
//! let response = Response::text(StatusCode::Ok, "abc123");
//! assert_eq!(
//!     response.to_bytes(),
//!     b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 6\r\n\r\nabc123"
//! );
//! ```

use super::{Headers, StatusCode};

/// Representa una respuesta HTTP completa
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    /// Código de estado HTTP
    status: StatusCode,

    /// Headers en orden de inserción
    headers: Headers,

    /// Cuerpo de la respuesta (puede ser vacío)
    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Headers::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header; si ya existe, se sobrescribe
    ///
    /// El valor se escribe tal cual en el wire, sin escapar ni validar.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Establece el body y su `Content-Length`
    ///
    /// Es la única forma de poner un body, así `Content-Length` siempre
    /// coincide con la longitud en bytes del contenido.
    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self.headers
            .insert("Content-Length", &self.body.len().to_string());
        self
    }

    /// Respuesta `text/plain`
    ///
    /// # Ejemplo
    /// ```
    /// use route_server::http::{Response, StatusCode};
    ///
    /// let response = Response::text(StatusCode::Ok, "Mozilla/5.0");
    /// assert_eq!(response.headers().get("Content-Length"), Some("11"));
    /// ```
    pub fn text(status: StatusCode, body: &str) -> Self {
        Self::new(status)
            .with_header("Content-Type", "text/plain")
            .with_body(body.as_bytes().to_vec())
    }

    /// Respuesta binaria `application/octet-stream` (contenido de archivos)
    pub fn octet_stream(status: StatusCode, body: Vec<u8>) -> Self {
        Self::new(status)
            .with_header("Content-Type", "application/octet-stream")
            .with_body(body)
    }

    /// 404 sin headers ni body
    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Cada header: `Name: Value\r\n`
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut result = Vec::with_capacity(64 + self.body.len());

        result.extend_from_slice(self.status.status_line().as_bytes());

        for (name, value) in self.headers.iter() {
            result.extend_from_slice(format!("{}: {}\r\n", name, value).as_bytes());
        }

        result.extend_from_slice(b"\r\n");
        result.extend_from_slice(&self.body);

        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
