//! Driving port for replacing a user's mood.

use async_trait::async_trait;

use crate::domain::{MoodError, MoodRecord, UserName};

/// Write side of the mood use-cases, consumed by inbound adapters.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MoodCommand: Send + Sync {
    /// Replace the mood of `user` with `mood` and return the stored record.
    async fn set_mood(&self, user: UserName, mood: String) -> Result<MoodRecord, MoodError>;
}
