#![cfg(feature = "docker")]
//! Database helper tests against a real PostgreSQL server.

use std::time::Duration;

use anyhow::Result;
use serial_test::serial;
use sqlx::migrate::Migrator;
use svckit::database::{migrate_up, send_keepalive_pings, DbConfig};
use svckit::testing::docker::setup_postgres;
use testcontainers::clients::Cli;
use tokio_util::sync::CancellationToken;

static MIGRATOR: Migrator = sqlx::migrate!("tests/testdata/migrations");

#[tokio::test]
#[serial]
async fn test_creates_database_and_runs_migrations() -> Result<()> {
    let docker = Cli::default();
    let (_server, mut settings) = setup_postgres(&docker);

    settings.wait_for_database_to_be_online(30).await?;

    settings.name = "toolkit_test".to_string();
    let pool = settings
        .ensure_database_exists_and_get_pool(&DbConfig::default())
        .await?;

    migrate_up(&pool, &MIGRATOR).await?;
    // Migrations are idempotent across restarts.
    migrate_up(&pool, &MIGRATOR).await?;

    sqlx::query(
        "insert into vehicle_positions (vehicle_id, latitude, longitude) values ($1, $2, $3)",
    )
    .bind(987)
    .bind(33.42)
    .bind(-111.93)
    .execute(&pool)
    .await?;

    // A second ensure call must reuse the existing database, not recreate it.
    let pool_again = settings
        .ensure_database_exists_and_get_pool(&DbConfig::default())
        .await?;
    let count: i64 = sqlx::query_scalar("select count(*) from vehicle_positions")
        .fetch_one(&pool_again)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

#[tokio::test]
#[serial]
async fn test_keepalive_pings_until_cancelled() -> Result<()> {
    let docker = Cli::default();
    let (_server, settings) = setup_postgres(&docker);

    settings.wait_for_database_to_be_online(30).await?;
    let pool = settings
        .ensure_database_exists_and_get_pool(&DbConfig::default())
        .await?;

    let token = CancellationToken::new();
    let keepalive = tokio::spawn(send_keepalive_pings(
        token.clone(),
        pool,
        Duration::from_millis(50),
    ));

    tokio::time::sleep(Duration::from_millis(200)).await;
    token.cancel();

    keepalive.await??;
    Ok(())
}
