//! # Manejo de una Conexión
//! src/server/connection.rs
//!
//! Cada conexión atiende exactamente una request:
//!
//! ```text
//! AwaitingData ──read/parse/route/write──▶ Responded ──shutdown──▶ Closed
//! ```
//!
//! Se hace una sola lectura: no hay reensamblado de una request partida en
//! varios segmentos TCP, ni keep-alive, ni pipelining. Una request
//! malformada cierra la conexión sin respuesta.

use crate::http::Request;
use crate::router::Router;
use std::io::{self, Read, Write};
use std::net::{Shutdown, TcpStream};
use tracing::{debug, info, warn};

/// Máximo de bytes que se leen de una conexión
pub const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Estado de la conexión; nunca vuelve a `AwaitingData`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    AwaitingData,
    Responded,
    Closed,
}

/// Una conexión aceptada
pub struct Connection {
    stream: TcpStream,
    state: ConnectionState,
}

impl Connection {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            state: ConnectionState::AwaitingData,
        }
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    /// Atiende la única request de la conexión y la cierra
    ///
    /// El socket se cierra aunque falle la lectura o la escritura; el error
    /// se retorna después del cierre.
    pub fn serve(&mut self, router: &Router) -> io::Result<()> {
        if self.state != ConnectionState::AwaitingData {
            return Ok(());
        }

        let result = self.respond(router);
        self.close();
        result
    }

    fn respond(&mut self, router: &Router) -> io::Result<()> {
        let mut buffer = vec![0u8; READ_BUFFER_SIZE];
        let bytes_read = self.stream.read(&mut buffer)?;

        if bytes_read == 0 {
            debug!("peer closed before sending data");
            return Ok(());
        }

        debug!(bytes = bytes_read, "data received");

        let request = match Request::parse(&buffer[..bytes_read]) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "malformed request, closing without response");
                return Ok(());
            }
        };

        info!(method = %request.method(), path = request.path(), "request");

        let response = router.route(&request);
        self.stream.write_all(&response.to_bytes())?;
        self.stream.flush()?;
        self.state = ConnectionState::Responded;

        info!(status = %response.status(), bytes = response.body().len(), "response sent");
        Ok(())
    }

    fn close(&mut self) {
        // NotConnected: el peer ya cerró, no hay nada que liberar del lado TCP
        if let Err(e) = self.stream.shutdown(Shutdown::Both) {
            if e.kind() != io::ErrorKind::NotConnected {
                debug!(error = %e, "shutdown failed");
            }
        }
        self.state = ConnectionState::Closed;
        debug!("client disconnected");
    }
}
