//! Shared utilities for integration testing.

use std::net::SocketAddr;
use tokio::net::TcpListener;

use user_service::config::ServiceConfig;
use user_service::http::HttpServer;

/// Bind an ephemeral port, spawn the service on it, and return the base
/// URL to hit it with.
pub async fn spawn_service() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    let server = HttpServer::new(ServiceConfig::default());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}
