//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser de una única petición por conexión.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/notes.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! User-Agent: curl/8.4.0\r\n
//! \r\n
//! contenido del archivo
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD SP PATH SP VERSION`, separados por un único espacio
//! 2. **Headers**: `Name: Value` (separador exacto `": "`), uno por línea
//! 3. **Línea vacía**: `\r\n\r\n` separa la cabecera del body
//! 4. **Body**: bytes crudos, tal cual llegaron. No se valida contra
//!    ningún `Content-Length`: se asume que una lectura trae la petición completa.

use super::Headers;
use thiserror::Error;

/// Separador entre la cabecera y el body
const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP
///
/// Sólo `GET` tiene un significado especial para el router; cualquier otro
/// token se conserva tal cual en `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,

    /// Cualquier otro token (PUT, DELETE, ...)
    Other(String),
}

impl Method {
    fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "POST" => Method::POST,
            other => Method::Other(other.to_string()),
        }
    }

    /// Convierte el método a string
    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::Other(token) => token,
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Representa un request HTTP parseado
///
/// Inmutable una vez construido; vive lo que dura la conexión.
#[derive(Debug, Clone)]
pub struct Request {
    /// Método HTTP
    method: Method,

    /// Path tal cual llegó (ej: "/echo/abc"), sin decodificar
    path: String,

    /// Versión HTTP; se guarda pero no afecta el comportamiento
    version: String,

    /// Headers con semántica last-write-wins
    headers: Headers,

    /// Body crudo (vacío si no hubo)
    body: Vec<u8>,
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No llegó ningún byte útil
    #[error("Empty request")]
    EmptyRequest,

    /// Falta el `\r\n\r\n` que cierra los headers
    #[error("Missing blank line after headers")]
    MissingHeadTerminator,

    /// La cabecera no es UTF-8 válido
    #[error("Request head is not valid UTF-8")]
    InvalidEncoding,

    /// La request line no tiene exactamente tres tokens
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// Header sin el separador `": "`
    #[error("Invalid header: {0:?}")]
    InvalidHeader(String),
}

impl Request {
    /// Parsea un request desde los bytes recibidos en la conexión
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use route_server::http::Request;
    ///
    /// let raw = b"GET /user-agent HTTP/1.1\r\nUser-Agent: curl/8.4.0\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.path(), "/user-agent");
    /// assert_eq!(request.header("User-Agent"), Some("curl/8.4.0"));
    /// assert!(request.body().is_empty());
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        if buffer.iter().all(u8::is_ascii_whitespace) {
            return Err(ParseError::EmptyRequest);
        }

        // 1. Separar cabecera y body en el primer \r\n\r\n
        let head_end = buffer
            .windows(HEAD_TERMINATOR.len())
            .position(|window| window == HEAD_TERMINATOR)
            .ok_or(ParseError::MissingHeadTerminator)?;

        let head = std::str::from_utf8(&buffer[..head_end])
            .map_err(|_| ParseError::InvalidEncoding)?;
        let body = buffer[head_end + HEAD_TERMINATOR.len()..].to_vec();

        // 2. Primera línea = request line, el resto = headers
        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default();
        let (method, path, version) = Self::parse_request_line(request_line)?;

        let headers = Self::parse_headers(lines)?;

        Ok(Request {
            method,
            path,
            version,
            headers,
            body,
        })
    }

    /// Formato: `GET /path HTTP/1.1`
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let parts: Vec<&str> = line.split(' ').collect();

        // Exactamente 3 partes no vacías: METHOD PATH VERSION
        if parts.len() != 3 || parts.iter().any(|part| part.is_empty()) {
            return Err(ParseError::InvalidRequestLine(line.to_string()));
        }

        Ok((
            Method::from_token(parts[0]),
            parts[1].to_string(),
            parts[2].to_string(),
        ))
    }

    /// Cada header tiene formato `Name: Value`; los duplicados sobrescriben
    fn parse_headers<'a>(lines: impl Iterator<Item = &'a str>) -> Result<Headers, ParseError> {
        let mut headers = Headers::new();

        for line in lines {
            match line.split_once(": ") {
                Some((name, value)) => headers.insert(name, value),
                None => return Err(ParseError::InvalidHeader(line.to_string())),
            }
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// Obtiene un header específico (nombre case-sensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name)
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}
