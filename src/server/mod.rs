//! # Módulo del Servidor HTTP
//! src/server/mod.rs
//!
//! 1. Escucha en un puerto (loopback por defecto)
//! 2. Acepta conexiones entrantes, un thread por conexión
//! 3. Lee y parsea una request
//! 4. Genera y envía la response, y cierra

pub mod connection;
pub mod tcp;

// Re-exportar para facilitar el uso
pub use connection::{Connection, ConnectionState};
pub use tcp::Server;
