//! gRPC server bootstrap helpers built on tonic.
//!
//! Servers created here carry HTTP/2 keepalive settings and the standard gRPC
//! health service, which doubles as the readiness probe used by
//! [`wait_for_service_to_be_online`].

use std::net::SocketAddr;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use tokio_util::sync::CancellationToken;
use tonic::transport::server::Router;
use tonic::transport::{Endpoint, Server};
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;
use tonic_health::server::HealthReporter;
use tracing::info;

/// Creates a server builder with keepalive settings and the health service
/// registered.
///
/// Callers add their own services to the returned router and mark them
/// serving through the reporter.
pub fn create_server() -> (HealthReporter, Router) {
    let (health_reporter, health_service) = tonic_health::server::health_reporter();

    let router = Server::builder()
        .http2_keepalive_interval(Some(Duration::from_secs(10)))
        .http2_keepalive_timeout(Some(Duration::from_secs(20)))
        .add_service(health_service);

    (health_reporter, router)
}

/// Hosts the server on the given port, shutting down gracefully when the
/// token is cancelled.
pub async fn host_server(router: Router, port: u16, token: CancellationToken) -> Result<()> {
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    info!(port, "hosting grpc server");

    router
        .serve_with_shutdown(addr, token.cancelled_owned())
        .await
        .context("failed to serve grpc")
}

/// Polls the health service until the server at `endpoint` answers, or the
/// timeout elapses.
pub async fn wait_for_service_to_be_online(endpoint: &str, timeout: Duration) -> Result<()> {
    let endpoint = Endpoint::from_shared(endpoint.to_string()).context("invalid grpc endpoint")?;
    let started = Instant::now();

    while started.elapsed() < timeout {
        if let Ok(channel) = endpoint.connect().await {
            let mut client = HealthClient::new(channel);
            let request = HealthCheckRequest {
                service: String::new(),
            };
            if client.check(request).await.is_ok() {
                return Ok(());
            }
        }

        tokio::time::sleep(Duration::from_millis(250)).await;
    }

    bail!(
        "grpc server at {} did not come online within {:?}",
        endpoint.uri(),
        timeout
    )
}
