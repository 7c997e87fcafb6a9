use std::sync::Arc;

use thiserror::Error;

use crate::config::ServerConfig;
use crate::data::table::WeaponTable;

pub mod api;
pub mod routes;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("failed to start runtime: {0}")]
    Runtime(std::io::Error),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },
    #[error("server stopped: {0}")]
    Serve(std::io::Error),
}

/// Blocking entry point: owns the tokio runtime for the lifetime of the server.
pub fn run_server(table: Arc<WeaponTable>, config: &ServerConfig) -> Result<(), ServerError> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(ServerError::Runtime)?;
    runtime.block_on(serve(table, config))
}

pub async fn serve(table: Arc<WeaponTable>, config: &ServerConfig) -> Result<(), ServerError> {
    let app = routes::app(table.clone(), config);
    let listener = tokio::net::TcpListener::bind(config.bind_addr.as_str())
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.bind_addr.clone(),
            source,
        })?;
    log::info!(
        "ammoguide server listening on http://{} ({} weapons, charts from {})",
        config.bind_addr,
        table.len(),
        config.visualizations_dir().display()
    );
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
