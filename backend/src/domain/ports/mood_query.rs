//! Driving port for reading a user's mood.

use async_trait::async_trait;

use crate::domain::{MoodError, MoodRecord, UserName};

/// Read side of the mood use-cases, consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoodQuery: Send + Sync {
    /// Return the current mood of `user`.
    ///
    /// Fails with [`MoodError::NotFound`] when the user never set a mood.
    async fn get_mood(&self, user: &UserName) -> Result<MoodRecord, MoodError>;
}
