//! # Route Server - Entry Point
//! src/main.rs

use clap::Parser;
use route_server::config::Config;
use route_server::error::ServerError;
use route_server::logging;
use route_server::server::Server;
use tracing::error;

fn main() {
    let config = Config::parse();

    if let Err(e) = logging::init(&config.log_level) {
        eprintln!("{}", e);
    }

    if let Err(e) = run(config) {
        error!(error = %e, "fatal error");
        std::process::exit(1);
    }
}

fn run(config: Config) -> Result<(), ServerError> {
    let server = Server::bind(config)?;
    // Sólo retorna si no se pudo leer la dirección local
    server.run()
}
