//! Shared harness: a real API server on an ephemeral port.

#![allow(dead_code)]

use std::sync::Arc;

use staffbook_api::{Server, ServerConfig};
use staffbook_client::HttpEmployeeApi;
use staffbook_storage::MemoryStore;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// A running server; dropping it stops the server.
pub struct TestServer {
    /// Collection URL, e.g. `http://127.0.0.1:41234/api/employees`.
    pub url: String,
    shutdown: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl TestServer {
    /// Start a server over an empty in-memory store.
    pub async fn start() -> Self {
        let config = ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            ..ServerConfig::in_memory()
        };
        let server = Server::new(config, Arc::new(MemoryStore::new()));
        let listener = server.bind().await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        let handle = tokio::spawn(async move {
            server
                .serve_with_shutdown(listener, async {
                    let _ = rx.await;
                })
                .await
                .unwrap();
        });

        Self {
            url: format!("http://{addr}/api/employees"),
            shutdown: Some(tx),
            handle: Some(handle),
        }
    }

    /// An HTTP client pointed at this server.
    pub fn api(&self) -> HttpEmployeeApi {
        HttpEmployeeApi::new(&self.url).unwrap()
    }

    /// Stop the server and wait for it to finish.
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.handle.take() {
            handle.await.unwrap();
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
