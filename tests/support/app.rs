//! The runtime-config server on an ephemeral port.

use std::collections::HashMap;
use std::net::Ipv4Addr;

use envsync::core::config::ProviderConfig;
use envsync::server::{self, AppState};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

/// A running server; shut down on drop.
pub struct TestApp {
    pub base: String,
    client: reqwest::Client,
    shutdown: Option<oneshot::Sender<()>>,
}

impl TestApp {
    pub async fn spawn(config: ProviderConfig) -> Self {
        Self::spawn_with_env(config, HashMap::new()).await
    }

    pub async fn spawn_with_env(config: ProviderConfig, env: HashMap<String, String>) -> Self {
        let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("bind");
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let _ = server::serve_with_shutdown(listener, AppState::new(config, env), async move {
                let _ = rx.await;
            })
            .await;
        });

        Self {
            base: format!("http://{}", addr),
            client: reqwest::Client::new(),
            shutdown: Some(tx),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// POST a raw body to the sync endpoint.
    pub async fn post_raw(&self, body: &str) -> reqwest::Response {
        self.client
            .post(self.url("/api/runtime-config"))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("request failed")
    }

    /// POST JSON to the sync endpoint.
    pub async fn post_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.post_raw(&body.to_string()).await
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(self.url(path))
            .send()
            .await
            .expect("request failed")
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
    }
}
