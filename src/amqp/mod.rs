// AMQP exchange publish/subscribe utilities.
//
// This module provides fan-out messaging over a pre-existing topic exchange:
// every subscription declares its own private queue bound with a catch-all
// pattern, so each subscriber receives an independent copy of every message.
// Delivery is at-least-once; messages that are nacked or left unresolved at
// shutdown are requeued by the broker, never dropped.

mod error;
pub(crate) mod metrics;
pub mod publisher;
pub mod subscription;

pub use error::AmqpError;
pub use publisher::ExchangePublisher;
pub use subscription::{ExchangeSubscription, Message};

use lapin::{Connection, ConnectionProperties};

/// Open a broker connection on the tokio runtime.
pub(crate) async fn connect(amqp_url: &str) -> Result<Connection, lapin::Error> {
    Connection::connect(
        amqp_url,
        ConnectionProperties::default()
            .with_executor(tokio_executor_trait::Tokio::current())
            .with_reactor(tokio_reactor_trait::Tokio),
    )
    .await
}
