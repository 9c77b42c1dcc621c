//! Port for mood record persistence.
//!
//! The [`MoodStore`] trait is the only way the domain reaches a key-value
//! backend. Adapters live under `outbound` (in-memory and Redis) and must be
//! observably interchangeable: same lookups, same overwrite semantics.

use async_trait::async_trait;

use crate::domain::{MoodRecord, UserName};

use super::define_port_error;

define_port_error! {
    /// Errors raised by mood store adapters.
    pub enum MoodStoreError {
        /// Backend connection could not be established or checked out.
        Connection {
            /// Adapter-supplied detail; never shown to HTTP clients.
            message: String,
        } => "mood store connection failed: {message}",
        /// A read or write command failed during execution.
        Query {
            /// Adapter-supplied detail; never shown to HTTP clients.
            message: String,
        } => "mood store query failed: {message}",
        /// A stored record could not be decoded into a [`MoodRecord`].
        Serialization {
            /// Adapter-supplied detail; never shown to HTTP clients.
            message: String,
        } => "mood record encoding failed: {message}",
    }
}

/// Key-value storage for mood records, keyed by user.
///
/// # Overwrite Semantics
///
/// `save` replaces any record held for the same user without a version
/// check; the backend's own ordering decides concurrent writes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoodStore: Send + Sync {
    /// Fetch the record for `user`, or `None` when the user has no mood.
    async fn find(&self, user: &UserName) -> Result<Option<MoodRecord>, MoodStoreError>;

    /// Store `record`, replacing any existing record for the same user.
    ///
    /// Returns the record as stored.
    async fn save(&self, record: MoodRecord) -> Result<MoodRecord, MoodStoreError>;
}
