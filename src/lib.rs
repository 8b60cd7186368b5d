//! svckit is a collection of utilities for services that talk to an AMQP
//! message broker, a PostgreSQL database, and a gRPC layer.
//!
//! The interesting part lives in [`amqp`]: a topic-exchange publisher and a
//! subscription consumer with explicit per-message acknowledgment, graceful
//! shutdown, and automatic requeue of unresolved messages. The remaining
//! modules are setup and bootstrap helpers shared across services.

pub mod amqp;
pub mod database;
pub mod grpc;
pub mod log;
pub mod metrics;
pub mod process;
pub mod redis;

#[cfg(feature = "docker")]
pub mod testing;
