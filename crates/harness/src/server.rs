//! Static server management: in-process spawn and readiness polling.

use std::path::Path;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{info, warn};

use crate::error::{HarnessError, HarnessResult};

/// Handle to a static asset server running in-process on an ephemeral port.
pub struct StaticServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl StaticServer {
    /// Binds an ephemeral port, serves `dist` on it, and waits until the
    /// server answers health checks before handing the handle out.
    pub async fn start(dist: impl AsRef<Path>) -> HarnessResult<Self> {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let base_url = format!("http://{addr}");

        info!("Starting static server for {}", dist.as_ref().display());
        let app = server::app(dist.as_ref());
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                warn!("static server exited: {e}");
            }
        });

        wait_for_ready(&base_url, Duration::from_secs(10)).await?;
        info!("Static server is ready at {base_url}");

        Ok(Self { base_url, handle })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn stop(&self) {
        self.handle.abort();
    }
}

impl Drop for StaticServer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Polls `GET /health` until it succeeds or the bounded timeout elapses.
pub async fn wait_for_ready(base_url: &str, timeout: Duration) -> HarnessResult<()> {
    let health_url = format!("{base_url}/health");
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(2))
        .build()?;

    let start = std::time::Instant::now();
    loop {
        match client.get(&health_url).send().await {
            Ok(resp) if resp.status().is_success() => return Ok(()),
            Ok(resp) => warn!("health check returned {}", resp.status()),
            Err(e) => {
                // connection refused is expected while the server is starting
                if !e.is_connect() {
                    warn!("health check error: {e}");
                }
            }
        }

        if start.elapsed() >= timeout {
            return Err(HarnessError::Timeout {
                condition: format!("GET {health_url}"),
                waited_ms: start.elapsed().as_millis() as u64,
            });
        }
        sleep(Duration::from_millis(100)).await;
    }
}
