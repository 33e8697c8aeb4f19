//! # Route Server
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo implementado desde cero. Cada conexión recibe
//! exactamente una request y una response, y se cierra.
//!
//! ## Arquitectura
//!
//! ```text
//! Server (accept) → Connection → Request::parse → Router → Response::to_bytes
//! ```
//!
//! - `http`: parsing de requests, construcción de responses, status codes
//! - `router`: resolución de las cuatro rutas fijas
//! - `commands`: handlers de cada ruta
//! - `storage`: acceso a archivos de la ruta `files`
//! - `server`: listener TCP y manejo de cada conexión
//! - `config`: argumentos CLI
//! - `logging`: inicialización de `tracing`
//! - `error`: errores de arranque
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use route_server::config::Config;
//! use route_server::server::Server;
//!
//! let server = Server::bind(Config::default()).expect("bind");
//! server.run().expect("accept loop");
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod router;
pub mod server;
pub mod storage;
