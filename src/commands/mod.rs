//! # Comandos del Servidor
//! src/commands/mod.rs
//!
//! Handlers de cada ruta. El [`Router`](crate::router::Router) decide cuál
//! invocar según el primer segmento del path.

pub mod basic;
pub mod files;

// Re-exportar handlers para facilitar el uso
pub use basic::{echo_handler, root_handler, user_agent_handler};
pub use files::files_handler;
