//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use portfolio_site::config::SiteConfig;
use portfolio_site::http::HttpServer;
use portfolio_site::lifecycle::Shutdown;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

/// A site bound to an ephemeral port.
#[allow(dead_code)]
pub struct RunningSite {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub config_tx: mpsc::UnboundedSender<SiteConfig>,
}

#[allow(dead_code)]
impl RunningSite {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Start the site on 127.0.0.1 with an OS-assigned port.
#[allow(dead_code)]
pub async fn start_site(mut config: SiteConfig) -> RunningSite {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    config.listener.bind_address = addr.to_string();

    let shutdown = Shutdown::new();
    let (config_tx, config_rx) = mpsc::unbounded_channel();
    let server = HttpServer::new(config).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, config_rx, server_shutdown).await;
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(100)).await;

    RunningSite {
        addr,
        shutdown,
        config_tx,
    }
}
