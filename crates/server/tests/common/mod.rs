//! # Common Test Utilities
//!
//! This module centralizes the test harness used across the `vistag-server`
//! integration tests. `TestApp` spawns the real server on a random port with
//! both upstream classifiers pointed at a single `httpmock::MockServer`.

#![allow(unused)]

use anyhow::Result;
use httpmock::MockServer;
use reqwest::Client;
use std::net::SocketAddr;
use tokio::{net::TcpListener, task::JoinHandle};
use vistag_server::{config::AppConfig, router::create_router, state::build_app_state};

/// The path the mock custom classifier listens on; the analyze API derives
/// its own path from the endpoint base URL.
pub const CLASSIFY_PATH: &str = "/classify";

pub const CV_KEY: &str = "test-cv-key";
pub const CP_PREDICTION_KEY: &str = "test-prediction-key";

/// A harness for end-to-end testing of the Axum server.
pub struct TestApp {
    pub address: String,
    pub client: Client,
    pub mock_server: MockServer,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestApp {
    /// Spawns the application server with default probability floors.
    pub async fn spawn() -> Result<Self> {
        Self::spawn_with_floors(None, None).await
    }

    /// Spawns the application server with explicit raw floor values, exactly
    /// as they would arrive from the environment.
    pub async fn spawn_with_floors(
        cv_floor: Option<&str>,
        cp_floor: Option<&str>,
    ) -> Result<Self> {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let mock_server = MockServer::start();

        let config = AppConfig {
            port: 0,
            cv_endpoint: Some(mock_server.url("")),
            cv_key: Some(CV_KEY.to_string()),
            cv_min_probability: cv_floor.map(String::from),
            cp_endpoint: Some(mock_server.url(CLASSIFY_PATH)),
            cp_prediction_key: Some(CP_PREDICTION_KEY.to_string()),
            cp_min_probability: cp_floor.map(String::from),
        };
        let app_state = build_app_state(config)?;

        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr: SocketAddr = listener.local_addr()?;
        let address = format!("http://{addr}");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel();
        let server_handle = tokio::spawn(async move {
            let app = create_router(app_state);
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            });
            if let Err(e) = server.await {
                tracing::error!("[TestApp] Server error: {e}");
            }
        });

        Ok(Self {
            address,
            client: Client::new(),
            mock_server,
            _server_handle: server_handle,
            shutdown_tx: Some(shutdown_tx),
        })
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
