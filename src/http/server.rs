//! HTTP server startup logic.

use std::net::SocketAddr;

use axum::Router;
use axum_server::Handle;

use crate::config::AppConfig;

use super::shutdown;

/// Server startup error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Server error: {0}")]
    Server(String),
}

/// Start the HTTP server based on configuration.
///
/// This function blocks until the server shuts down.
pub async fn start_server(app: Router, config: &AppConfig) -> Result<(), ServerError> {
    let addr = config
        .socket_addr()
        .map_err(|e| ServerError::InvalidAddress(e.to_string()))?;

    let handle = Handle::new();
    shutdown::setup_shutdown_handler(handle.clone());

    serve(app, addr, handle).await
}

async fn serve(app: Router, addr: SocketAddr, handle: Handle) -> Result<(), ServerError> {
    // Bind up front so an occupied port surfaces as a bind error
    let listener = std::net::TcpListener::bind(addr)?;
    listener.set_nonblocking(true)?;

    tracing::info!(%addr, "Starting HTTP server");

    axum_server::from_tcp(listener)
        .handle(handle)
        .serve(app.into_make_service())
        .await
        .map_err(|e| ServerError::Server(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_invalid_host_is_rejected() {
        let mut config = AppConfig::default();
        config.http.host = "localhost:80".to_string();

        let err = start_server(Router::new(), &config).await.unwrap_err();
        assert!(matches!(err, ServerError::InvalidAddress(_)));
    }

    #[tokio::test]
    async fn test_occupied_port_is_bind_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let err = serve(Router::new(), addr, Handle::new()).await.unwrap_err();
        assert!(matches!(err, ServerError::Bind(_)));
    }

    #[tokio::test]
    async fn test_graceful_shutdown_stops_server() {
        let handle = Handle::new();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();
        let server = tokio::spawn(serve(Router::new(), addr, handle.clone()));

        assert!(handle.listening().await.is_some());
        handle.graceful_shutdown(Some(Duration::from_secs(1)));

        let result = tokio::time::timeout(Duration::from_secs(5), server)
            .await
            .unwrap()
            .unwrap();
        assert!(result.is_ok());
    }
}
