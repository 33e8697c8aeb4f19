//! # Módulo HTTP
//!
//! Subconjunto fijo de HTTP/1.1 implementado a mano:
//!
//! - Parsing de una request por conexión
//! - Construcción de responses
//! - Los tres status codes que emite el servidor
//!
//! No hay keep-alive, pipelining, chunked encoding ni negociación de
//! versión: cada conexión recibe exactamente una respuesta y se cierra.
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/hola HTTP/1.1\r\n
//! Header-Name: Header-Value\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 4\r\n
//! \r\n
//! hola
//! ```

pub mod headers;   // Mapa de headers last-write-wins
pub mod request;   // Parsing de HTTP requests
pub mod response;  // Construcción de HTTP responses
pub mod status;    // Códigos de estado HTTP

// Permite usar `http::Request` en vez de `http::request::Request`
pub use headers::Headers;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
