//! Mood domain service.
//!
//! [`MoodService`] implements the driving ports on top of a [`MoodStore`] and
//! owns the not-found policy: an absent record becomes
//! [`MoodError::NotFound`] carrying the configured message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{MoodCommand, MoodQuery, MoodStore};
use crate::domain::{MoodError, MoodRecord, UserName};

/// Mood service implementing [`MoodQuery`] and [`MoodCommand`].
pub struct MoodService<S: ?Sized> {
    store: Arc<S>,
    not_found_message: String,
}

impl<S: ?Sized> Clone for MoodService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            not_found_message: self.not_found_message.clone(),
        }
    }
}

impl<S: ?Sized> MoodService<S> {
    /// Create a service over `store`.
    ///
    /// `not_found_message` is returned verbatim inside
    /// [`MoodError::NotFound`] whenever a user has no mood.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mood_service::domain::MoodService;
    /// use mood_service::outbound::memory::InMemoryMoodStore;
    ///
    /// let service = MoodService::new(Arc::new(InMemoryMoodStore::new()), "mood not set");
    /// assert_eq!(service.not_found_message(), "mood not set");
    /// ```
    pub fn new(store: Arc<S>, not_found_message: impl Into<String>) -> Self {
        Self {
            store,
            not_found_message: not_found_message.into(),
        }
    }

    /// Message attached to [`MoodError::NotFound`].
    pub fn not_found_message(&self) -> &str {
        self.not_found_message.as_str()
    }
}

#[async_trait]
impl<S> MoodQuery for MoodService<S>
where
    S: MoodStore + ?Sized,
{
    async fn get_mood(&self, user: &UserName) -> Result<MoodRecord, MoodError> {
        match self.store.find(user).await? {
            Some(record) => Ok(record),
            None => {
                debug!(user = %user, "no mood recorded");
                Err(MoodError::not_found(
                    user.clone(),
                    self.not_found_message.as_str(),
                ))
            }
        }
    }
}

#[async_trait]
impl<S> MoodCommand for MoodService<S>
where
    S: MoodStore + ?Sized,
{
    async fn set_mood(&self, user: UserName, mood: String) -> Result<MoodRecord, MoodError> {
        info!(user = %user, mood = %mood, "setting mood");
        let record = MoodRecord::new(user, mood);
        self.store.save(record).await.map_err(MoodError::from)
    }
}
