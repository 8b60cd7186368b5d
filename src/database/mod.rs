// PostgreSQL helpers: connection settings, database bootstrap, embedded
// migrations, and idle-connection keepalive.

mod keepalive;
mod postgres;

pub use keepalive::send_keepalive_pings;
pub use postgres::{create_pool, migrate_up, DbConfig, PostgresSettings};
