//! Redis-backed mood store.
//!
//! Each record is a hash at `<keyspace>:<user>` with the fields `user` and
//! `mood`; the user is also added to the `<keyspace>` index set. Saves run as
//! a single `MULTI/EXEC` pipeline so readers never observe a partial hash.
//!
//! Connections come from a `bb8` pool. [`RedisMoodStore::connect`] checks out
//! a connection and issues `PING`, so an unreachable server fails at startup
//! rather than on the first request.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use bb8_redis::RedisConnectionManager;
use bb8_redis::bb8::{Pool, PooledConnection};
use bb8_redis::redis::{self, AsyncCommands};
use tracing::{debug, info};

use crate::domain::ports::{MoodStore, MoodStoreError};
use crate::domain::{MoodRecord, UserName};

const USER_FIELD: &str = "user";
const MOOD_FIELD: &str = "mood";

/// Default keyspace, shared with the index set name.
pub const DEFAULT_KEYSPACE: &str = "moods";

/// Connection settings for [`RedisMoodStore`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use mood_service::outbound::redis::RedisStoreConfig;
///
/// let config = RedisStoreConfig::new("cache.internal", 6380)
///     .with_keyspace("moods-staging")
///     .with_max_size(4)
///     .with_connection_timeout(Duration::from_secs(2));
/// assert_eq!(config.connection_url(), "redis://cache.internal:6380/");
/// assert_eq!(config.keyspace(), "moods-staging");
/// ```
#[derive(Debug, Clone)]
pub struct RedisStoreConfig {
    host: String,
    port: u16,
    keyspace: String,
    max_size: u32,
    connection_timeout: Duration,
}

impl RedisStoreConfig {
    /// Create a configuration for `host:port`.
    ///
    /// Defaults: keyspace `moods`, 10 pooled connections, 5 second checkout
    /// timeout.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            keyspace: DEFAULT_KEYSPACE.to_owned(),
            max_size: 10,
            connection_timeout: Duration::from_secs(5),
        }
    }

    /// Set the key prefix and index set name.
    pub fn with_keyspace(mut self, keyspace: impl Into<String>) -> Self {
        self.keyspace = keyspace.into();
        self
    }

    /// Set the maximum number of pooled connections.
    pub fn with_max_size(mut self, max_size: u32) -> Self {
        self.max_size = max_size;
        self
    }

    /// Set how long a request waits for a pooled connection.
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Redis host name or address.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Redis TCP port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Key prefix and index set name.
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    /// Connection URL handed to the Redis client.
    pub fn connection_url(&self) -> String {
        if self.host.contains(':') {
            format!("redis://[{}]:{}/", self.host, self.port)
        } else {
            format!("redis://{}:{}/", self.host, self.port)
        }
    }
}

/// [`MoodStore`] adapter backed by a Redis server.
#[derive(Clone)]
pub struct RedisMoodStore {
    pool: Pool<RedisConnectionManager>,
    keyspace: String,
}

impl RedisMoodStore {
    /// Build the connection pool and verify the server answers `PING`.
    ///
    /// # Errors
    ///
    /// Returns [`MoodStoreError::Connection`] when the URL is invalid, the
    /// pool cannot be built, or the server does not respond.
    pub async fn connect(config: RedisStoreConfig) -> Result<Self, MoodStoreError> {
        let manager = RedisConnectionManager::new(config.connection_url())
            .map_err(|err| MoodStoreError::connection(err.to_string()))?;
        let pool = Pool::builder()
            .max_size(config.max_size)
            .connection_timeout(config.connection_timeout)
            .build(manager)
            .await
            .map_err(|err| MoodStoreError::connection(err.to_string()))?;

        let store = Self {
            pool,
            keyspace: config.keyspace.clone(),
        };
        store.ping().await?;
        info!(
            host = %config.host,
            port = config.port,
            keyspace = %config.keyspace,
            "redis mood store connected"
        );
        Ok(store)
    }

    /// Key prefix and index set name in use.
    pub fn keyspace(&self) -> &str {
        &self.keyspace
    }

    async fn connection(
        &self,
    ) -> Result<PooledConnection<'_, RedisConnectionManager>, MoodStoreError> {
        self.pool
            .get()
            .await
            .map_err(|err| MoodStoreError::connection(err.to_string()))
    }

    async fn ping(&self) -> Result<(), MoodStoreError> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut *conn)
            .await
            .map_err(|err| MoodStoreError::connection(err.to_string()))?;
        Ok(())
    }
}

#[async_trait]
impl MoodStore for RedisMoodStore {
    async fn find(&self, user: &UserName) -> Result<Option<MoodRecord>, MoodStoreError> {
        let key = record_key(&self.keyspace, user);
        let mut conn = self.connection().await?;
        let fields: HashMap<String, String> = conn
            .hgetall(&key)
            .await
            .map_err(|err| MoodStoreError::query(err.to_string()))?;
        debug!(key = %key, hit = !fields.is_empty(), "redis mood lookup");
        decode_record(user, fields)
    }

    async fn save(&self, record: MoodRecord) -> Result<MoodRecord, MoodStoreError> {
        let key = record_key(&self.keyspace, record.user());
        let mut conn = self.connection().await?;

        let mut pipe = redis::pipe();
        pipe.atomic()
            .del(&key)
            .ignore()
            .hset_multiple(
                &key,
                &[(USER_FIELD, record.key()), (MOOD_FIELD, record.mood())],
            )
            .ignore()
            .sadd(&self.keyspace, record.key())
            .ignore();
        let _: () = pipe
            .query_async(&mut *conn)
            .await
            .map_err(|err| MoodStoreError::query(err.to_string()))?;

        debug!(key = %key, "redis mood stored");
        Ok(record)
    }
}

/// Hash key holding the record of `user`.
fn record_key(keyspace: &str, user: &UserName) -> String {
    format!("{keyspace}:{user}")
}

/// Turn the fields returned by `HGETALL` back into a record.
///
/// An empty field map means the key does not exist.
fn decode_record(
    user: &UserName,
    mut fields: HashMap<String, String>,
) -> Result<Option<MoodRecord>, MoodStoreError> {
    if fields.is_empty() {
        return Ok(None);
    }

    let stored_user = fields.remove(USER_FIELD).ok_or_else(|| {
        MoodStoreError::serialization(format!("record for {user} has no `{USER_FIELD}` field"))
    })?;
    if stored_user != user.as_str() {
        return Err(MoodStoreError::serialization(format!(
            "record for {user} is stored under user `{stored_user}`"
        )));
    }

    let mood = fields.remove(MOOD_FIELD).ok_or_else(|| {
        MoodStoreError::serialization(format!("record for {user} has no `{MOOD_FIELD}` field"))
    })?;
    Ok(Some(MoodRecord::new(user.clone(), mood)))
}
