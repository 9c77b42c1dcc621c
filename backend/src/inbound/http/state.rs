//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` and depend only on the
//! driving ports, so they stay testable without a store.

use std::sync::Arc;

use crate::domain::ports::{MoodCommand, MoodQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side, used by `GET /mood/user/{name}`.
    pub moods: Arc<dyn MoodQuery>,
    /// Write side, used by `PUT /mood/user/{name}`.
    pub mood_updates: Arc<dyn MoodCommand>,
}

impl HttpState {
    /// Bundle the query and command ports.
    pub fn new(moods: Arc<dyn MoodQuery>, mood_updates: Arc<dyn MoodCommand>) -> Self {
        Self {
            moods,
            mood_updates,
        }
    }

    /// Build state where one service value backs both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mood_service::domain::MoodService;
    /// use mood_service::inbound::http::state::HttpState;
    /// use mood_service::outbound::memory::InMemoryMoodStore;
    ///
    /// let service = MoodService::new(Arc::new(InMemoryMoodStore::new()), "mood not set");
    /// let _state = HttpState::from_service(Arc::new(service));
    /// ```
    pub fn from_service<T>(service: Arc<T>) -> Self
    where
        T: MoodQuery + MoodCommand + 'static,
    {
        Self {
            moods: service.clone(),
            mood_updates: service,
        }
    }
}
