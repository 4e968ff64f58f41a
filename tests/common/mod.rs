//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use regex_connector::{ConnectorConfig, HttpServer, Shutdown};
use tokio::net::TcpListener;

/// A connector running on an ephemeral port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn operation_url(&self, operation_id: &str) -> String {
        self.url(&format!("/operations/{}", operation_id))
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start the connector with `config` and wait until it accepts requests.
pub async fn start_server(config: ConnectorConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, shutdown.clone());
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer { addr, shutdown }
}

/// Client that never reuses connections between tests.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .build()
        .unwrap()
}
