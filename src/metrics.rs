//! Prometheus metrics exposition.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;
use prometheus::{Encoder, TextEncoder};
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Gathers all registered metrics and encodes them as Prometheus text format.
pub fn gather_metrics() -> Result<String> {
    let mut buffer = vec![];
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    encoder.encode(&metric_families, &mut buffer)?;

    Ok(String::from_utf8(buffer)?)
}

/// Hosts `GET /metrics` on the given port until the token is cancelled.
pub async fn host_metrics(port: u16, token: CancellationToken) -> Result<()> {
    let app = Router::new().route("/metrics", get(serve_metrics));
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind metrics listener")?;

    info!(port, "hosting metrics");

    axum::serve(listener, app)
        .with_graceful_shutdown(token.cancelled_owned())
        .await
        .context("failed to serve metrics")
}

async fn serve_metrics() -> (StatusCode, String) {
    match gather_metrics() {
        Ok(body) => (StatusCode::OK, body),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amqp::metrics::SubscriptionMetrics;

    #[test]
    fn test_gather_metrics() {
        let handles = SubscriptionMetrics::for_subscription("gather.queue", "gather.exchange");
        handles.messages_consumed.inc();

        let metrics_text = gather_metrics().unwrap();
        assert!(metrics_text.contains("amqp_messages_recv_total"));
    }

    #[tokio::test]
    async fn test_host_metrics_shuts_down_on_cancellation() {
        let token = CancellationToken::new();
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let server = tokio::spawn(host_metrics(port, token.clone()));
        tokio::time::sleep(std::time::Duration::from_millis(100)).await;

        token.cancel();
        server.await.unwrap().unwrap();
    }
}
