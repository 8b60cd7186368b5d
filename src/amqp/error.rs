use thiserror::Error;

/// Errors returned by the AMQP publisher and subscription consumer.
///
/// All setup-phase failures are returned synchronously; no retry or backoff
/// happens inside this layer. Cleanup failures during delivery-loop shutdown
/// are logged rather than surfaced, since the pipeline is already being torn
/// down at that point.
#[derive(Debug, Error)]
pub enum AmqpError {
    #[error("failed to connect to broker")]
    Connection(#[source] lapin::Error),

    #[error("failed to prepare queue for exchange subscription")]
    Setup(#[source] lapin::Error),

    #[error("failed to start consuming messages from queue")]
    ConsumeStart(#[source] lapin::Error),

    #[error("failed to publish message")]
    Publish(#[source] lapin::Error),

    #[error("broker connection has not been established, call ensure_ready first")]
    NotConnected,
}
