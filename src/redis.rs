//! Redis helpers.

use std::time::Duration;

use anyhow::{Context, Result};

/// Waits for the Redis server to be online for the given seconds.
pub async fn wait_for_redis_to_be_online(url: &str, seconds_to_wait: u32) -> Result<()> {
    let client = redis::Client::open(url).context("invalid redis url")?;
    let mut attempt = 0;

    loop {
        match ping(&client).await {
            Ok(()) => return Ok(()),
            Err(err) if attempt + 1 >= seconds_to_wait.max(1) => {
                return Err(err).with_context(|| {
                    format!("redis at {url} did not come online within {seconds_to_wait}s")
                });
            }
            Err(_) => {
                attempt += 1;
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }
}

async fn ping(client: &redis::Client) -> Result<(), redis::RedisError> {
    let mut conn = client.get_multiplexed_async_connection().await?;
    let _pong: String = redis::cmd("PING").query_async(&mut conn).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_fails_immediately() {
        let result = wait_for_redis_to_be_online("not-a-redis-url", 1).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_unreachable_server_fails_after_waiting() {
        let result = wait_for_redis_to_be_online("redis://127.0.0.1:1", 1).await;
        assert!(result.is_err());
    }
}
