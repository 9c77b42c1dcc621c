//! Shared helper utilities for backend integration tests.
//!
//! Redis-backed suites only run when `REDIS_TEST_HOST` is set. Without it the
//! helper prints a skip marker; with it, a failed connection panics so CI
//! breakage is not masked.

use std::env;

use mood_service::outbound::redis::{RedisMoodStore, RedisStoreConfig};
use uuid::Uuid;

const DEFAULT_REDIS_TEST_PORT: u16 = 6379;

/// Connection settings for the test server, isolated under a fresh keyspace.
///
/// Returns `None` when `REDIS_TEST_HOST` is unset.
pub fn redis_test_config() -> Option<RedisStoreConfig> {
    let host = env::var("REDIS_TEST_HOST").ok()?;
    let port = env::var("REDIS_TEST_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_REDIS_TEST_PORT);
    let keyspace = format!("moods-test-{}", Uuid::new_v4().simple());
    Some(RedisStoreConfig::new(host, port).with_keyspace(keyspace))
}

/// Connect a Redis store for tests, or print a skip marker.
pub async fn redis_store_or_skip(suite: &str) -> Option<(RedisMoodStore, RedisStoreConfig)> {
    let Some(config) = redis_test_config() else {
        eprintln!("SKIP-REDIS: {suite} needs REDIS_TEST_HOST");
        return None;
    };
    match RedisMoodStore::connect(config.clone()).await {
        Ok(store) => Some((store, config)),
        Err(err) => panic!("Redis test store setup failed: {err}. Unset REDIS_TEST_HOST to skip."),
    }
}
