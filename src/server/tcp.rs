//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! Acepta conexiones indefinidamente y atiende cada una en su propio thread.
//! No hay límite de conexiones ni control de admisión. El `Router` se
//! comparte entre threads con `Arc` y es de sólo lectura; las operaciones de
//! archivo bloquean únicamente el thread de su conexión.

use super::connection::Connection;
use crate::config::Config;
use crate::error::ServerError;
use crate::router::Router;
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use tracing::{error, info, info_span};

/// Listener HTTP
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: TcpListener,
}

impl Server {
    /// Valida la configuración y hace bind a `host:port`
    pub fn bind(config: Config) -> Result<Self, ServerError> {
        config.validate()?;

        let address = config.address();
        let listener = TcpListener::bind(&address)
            .map_err(|source| ServerError::Bind { address, source })?;

        let router = Arc::new(Router::with_directory(&config.directory));

        Ok(Self {
            config,
            router,
            listener,
        })
    }

    /// Dirección real de escucha (útil con puerto 0)
    pub fn local_addr(&self) -> Result<SocketAddr, ServerError> {
        Ok(self.listener.local_addr()?)
    }

    /// Loop de accept; sólo retorna si falla `local_addr`
    pub fn run(&self) -> Result<(), ServerError> {
        info!(
            address = %self.local_addr()?,
            directory = %self.config.directory,
            "server listening"
        );

        for stream in self.listener.incoming() {
            match stream {
                Ok(stream) => self.spawn_connection(stream),
                Err(e) => error!(error = %e, "failed to accept connection"),
            }
        }

        Ok(())
    }

    fn spawn_connection(&self, stream: TcpStream) {
        let router = Arc::clone(&self.router);
        let peer = stream
            .peer_addr()
            .map(|addr| addr.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        info!(peer = %peer, "client connected");

        let span = info_span!("connection", peer = %peer);

        // Si el OS no da el thread, el stream se descarta y el loop sigue
        let spawned = thread::Builder::new().spawn(move || {
            let _entered = span.enter();

            let mut connection = Connection::new(stream);
            if let Err(e) = connection.serve(&router) {
                error!(error = %e, "connection failed");
            }
        });

        if let Err(e) = spawned {
            error!(peer = %peer, error = %e, "failed to spawn connection thread");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    fn start(config: Config) -> SocketAddr {
        let server = Server::bind(config).expect("bind");
        let addr = server.local_addr().unwrap();
        thread::spawn(move || server.run());
        addr
    }

    #[test]
    fn test_bind_ephemeral_port() {
        let mut config = Config::default();
        config.port = 0;

        let server = Server::bind(config).unwrap();
        let addr = server.local_addr().unwrap();

        assert!(addr.ip().is_loopback());
        assert_ne!(addr.port(), 0);
    }

    #[test]
    fn test_bind_rejects_invalid_config() {
        let mut config = Config::default();
        config.port = 0;
        config.directory = "/definitely/not/a/real/dir".to_string();

        assert!(matches!(Server::bind(config), Err(ServerError::Config(_))));
    }

    #[test]
    fn test_bind_port_in_use() {
        let taken = TcpListener::bind("127.0.0.1:0").unwrap();
        let mut config = Config::default();
        config.port = taken.local_addr().unwrap().port();

        assert!(matches!(Server::bind(config), Err(ServerError::Bind { .. })));
    }

    #[test]
    fn test_serves_concurrent_connections() {
        let mut config = Config::default();
        config.port = 0;
        let addr = start(config);

        // La primera conexión no manda nada todavía; la segunda no debe esperarla
        let mut idle = TcpStream::connect(addr).unwrap();

        let mut client = TcpStream::connect(addr).unwrap();
        client.write_all(b"GET /echo/second HTTP/1.1\r\n\r\n").unwrap();
        let mut buf = Vec::new();
        client.read_to_end(&mut buf).unwrap();
        assert!(buf.ends_with(b"\r\n\r\nsecond"));

        idle.write_all(b"GET /echo/first HTTP/1.1\r\n\r\n").unwrap();
        let mut buf = Vec::new();
        idle.read_to_end(&mut buf).unwrap();
        assert!(buf.ends_with(b"\r\n\r\nfirst"));
    }
}
