//! Process-local mood store.
//!
//! Records live in a `HashMap` behind a mutex and vanish with the process.
//! Used for tests and local runs (`MOOD_STORE=memory`).

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{MoodStore, MoodStoreError};
use crate::domain::{MoodRecord, UserName};

/// In-memory implementation of the [`MoodStore`] port.
///
/// # Examples
/// ```
/// use mood_service::domain::ports::MoodStore;
/// use mood_service::domain::{MoodRecord, UserName};
/// use mood_service::outbound::memory::InMemoryMoodStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryMoodStore::new();
/// let user = UserName::new("stehrn").expect("valid user");
/// store.save(MoodRecord::new(user.clone(), "happy")).await.expect("save");
/// let found = store.find(&user).await.expect("find");
/// assert_eq!(found.map(|r| r.mood().to_owned()), Some("happy".to_owned()));
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryMoodStore {
    records: Mutex<HashMap<UserName, MoodRecord>>,
}

impl InMemoryMoodStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn records(&self) -> Result<MutexGuard<'_, HashMap<UserName, MoodRecord>>, MoodStoreError> {
        self.records
            .lock()
            .map_err(|_| MoodStoreError::query("in-memory mood store lock poisoned"))
    }
}

#[async_trait]
impl MoodStore for InMemoryMoodStore {
    async fn find(&self, user: &UserName) -> Result<Option<MoodRecord>, MoodStoreError> {
        Ok(self.records()?.get(user).cloned())
    }

    async fn save(&self, record: MoodRecord) -> Result<MoodRecord, MoodStoreError> {
        self.records()?
            .insert(record.user().clone(), record.clone());
        Ok(record)
    }
}
