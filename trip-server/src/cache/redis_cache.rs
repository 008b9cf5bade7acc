//! Redis-backed cache store.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use tokio::sync::OnceCell;

use crate::gateway::{CacheError, TripCache};

impl From<redis::RedisError> for CacheError {
    fn from(err: redis::RedisError) -> Self {
        CacheError::new(err.to_string())
    }
}

/// Cache store in a shared Redis instance.
///
/// Opening the client does not connect. The first operation establishes a
/// single managed connection, which clones share and which reconnects
/// after failures.
#[derive(Clone)]
pub struct RedisTripCache {
    client: redis::Client,
    connection: Arc<OnceCell<ConnectionManager>>,
}

impl RedisTripCache {
    /// Create a cache for the Redis instance at `url`
    /// (e.g. `redis://127.0.0.1:6379`).
    pub fn new(url: &str) -> Result<Self, CacheError> {
        let client = redis::Client::open(url)?;
        Ok(Self {
            client,
            connection: Arc::new(OnceCell::new()),
        })
    }

    async fn connection(&self) -> Result<ConnectionManager, CacheError> {
        let conn = self
            .connection
            .get_or_try_init(|| ConnectionManager::new(self.client.clone()))
            .await?;
        Ok(conn.clone())
    }
}

#[async_trait]
impl TripCache for RedisTripCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut conn = self.connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Option<Duration>,
    ) -> Result<bool, CacheError> {
        let mut conn = self.connection().await?;

        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value);
        if let Some(ttl) = ttl {
            cmd.arg("EX").arg(ttl.as_secs());
        }

        let reply: Option<String> = cmd.query_async(&mut conn).await?;
        Ok(reply.as_deref() == Some("OK"))
    }
}
