//! Redis-backed key-value stores.
//!
//! [`KeyValueStore`] is implemented for the handles callers usually already
//! hold (`ConnectionManager`, `MultiplexedConnection`) and for [`RedisStore`],
//! a bb8 pool of `redis::Client` built from configuration.

use std::time::Duration;

use async_trait::async_trait;
use bb8::{Pool, PooledConnection};
use redis::aio::{ConnectionLike, ConnectionManager, MultiplexedConnection};
use redis::{AsyncCommands, Client};

use crate::cache::{KeyValueStore, StoreError};
use crate::config::settings::RedisSettings;

type RedisPool = Pool<Client>;

/// How a TTL is expressed on the `SET` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expiry {
    /// Plain `SET`, the key never expires.
    Persist,
    /// `SET ... EX seconds`.
    Seconds(u64),
    /// `SET ... PX milliseconds`.
    Millis(u64),
}

impl Expiry {
    fn from_ttl(ttl: Duration) -> Self {
        if ttl.is_zero() {
            Expiry::Persist
        } else if ttl.subsec_nanos() == 0 {
            Expiry::Seconds(ttl.as_secs())
        } else {
            // Sub-millisecond TTLs still have to expire, so round up to 1ms.
            let millis = ttl.as_millis().max(1);
            Expiry::Millis(u64::try_from(millis).unwrap_or(u64::MAX))
        }
    }
}

async fn read_from<C>(conn: &mut C, key: &str) -> Result<Option<Vec<u8>>, StoreError>
where
    C: ConnectionLike + Send + Sync,
{
    let value: Option<Vec<u8>> = conn.get(key).await?;
    Ok(value)
}

async fn write_to<C>(
    conn: &mut C,
    key: &str,
    value: Vec<u8>,
    ttl: Duration,
) -> Result<(), StoreError>
where
    C: ConnectionLike + Send + Sync,
{
    match Expiry::from_ttl(ttl) {
        Expiry::Persist => conn.set::<_, _, ()>(key, value).await?,
        Expiry::Seconds(seconds) => conn.set_ex::<_, _, ()>(key, value, seconds).await?,
        Expiry::Millis(millis) => {
            let _: () = redis::cmd("SET")
                .arg(key)
                .arg(value)
                .arg("PX")
                .arg(millis)
                .query_async(conn)
                .await?;
        }
    }
    Ok(())
}

/// Redis store with a bb8 connection pool.
#[derive(Clone)]
pub struct RedisStore {
    pool: RedisPool,
}

impl RedisStore {
    /// Open a client for `settings.url` and build the pool.
    ///
    /// The returned store is handed to an adapter; dropping it closes the pool.
    pub async fn connect(settings: &RedisSettings) -> Result<Self, StoreError> {
        let client = Client::open(settings.url.as_str())?;

        let pool = Pool::builder()
            .max_size(settings.pool_size)
            .connection_timeout(Duration::from_secs(settings.connection_timeout))
            .build(client)
            .await?;

        tracing::info!(
            url = %settings.redacted_url(),
            pool_size = settings.pool_size,
            "Redis pool ready"
        );

        Ok(Self { pool })
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: RedisPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &RedisPool {
        &self.pool
    }

    async fn get_conn(&self) -> Result<PooledConnection<'_, Client>, StoreError> {
        Ok(self.pool.get().await?)
    }
}

impl std::fmt::Debug for RedisStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisStore")
            .field("state", &self.pool.state())
            .finish()
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.get_conn().await?;
        let conn_ref: &mut MultiplexedConnection = &mut conn;
        read_from(conn_ref, key).await
    }

    async fn write(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.get_conn().await?;
        let conn_ref: &mut MultiplexedConnection = &mut conn;
        write_to(conn_ref, key, value, ttl).await
    }
}

#[async_trait]
impl KeyValueStore for ConnectionManager {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.clone();
        read_from(&mut conn, key).await
    }

    async fn write(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.clone();
        write_to(&mut conn, key, value, ttl).await
    }
}

#[async_trait]
impl KeyValueStore for MultiplexedConnection {
    async fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let mut conn = self.clone();
        read_from(&mut conn, key).await
    }

    async fn write(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<(), StoreError> {
        let mut conn = self.clone();
        write_to(&mut conn, key, value, ttl).await
    }
}
