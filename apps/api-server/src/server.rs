//! Server lifecycle - explicit start and stop around a store connection.
//!
//! `run_server` opens the store connection, binds the listener, and resolves
//! once the server is accepting requests. The returned handle is closed
//! exactly once; dropping the state it owns closes the store connection.

use std::net::SocketAddr;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::middleware::error::AppError;
use crate::state::AppState;

/// A started server, stoppable through [`RunningServer::close`].
pub struct RunningServer {
    handle: ServerHandle,
    addr: SocketAddr,
    task: tokio::task::JoinHandle<std::io::Result<()>>,
}

impl RunningServer {
    /// The bound local address. With port 0 in the config this is the
    /// ephemeral port the listener actually got.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Gracefully stop the listener and wait for full teardown.
    pub async fn close(self) {
        tracing::info!("Stopping server on {}", self.addr);
        self.handle.stop(true).await;
        let _ = self.task.await;
    }

    /// Block until the server exits on its own (signal-driven shutdown).
    pub async fn wait(self) -> std::io::Result<()> {
        self.task.await.map_err(std::io::Error::other)?
    }
}

/// Open the store connection described by `config` and start the server.
pub async fn run_server(config: &AppConfig) -> std::io::Result<RunningServer> {
    let state = AppState::new(config.database.as_ref()).await;
    run_with_state(config, state)
}

/// Start the server around an explicitly provided state. Tests use this to
/// share a store handle with their assertions.
pub fn run_with_state(config: &AppConfig, state: AppState) -> std::io::Result<RunningServer> {
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config())
            .configure(handlers::configure_routes)
    })
    .bind((config.host.as_str(), config.port))?;

    let addr = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    let task = tokio::spawn(server);

    Ok(RunningServer { handle, addr, task })
}

/// Malformed or incomplete JSON bodies surface as a 400 validation error
/// rather than the framework default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}
