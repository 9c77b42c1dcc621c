//! Builders turning settings into the store and handler state.

use std::sync::Arc;

use tracing::info;

use mood_service::config::{MoodSettings, StoreKind};
use mood_service::domain::MoodService;
use mood_service::domain::ports::MoodStore;
use mood_service::inbound::http::state::HttpState;
use mood_service::outbound::memory::InMemoryMoodStore;
use mood_service::outbound::redis::RedisMoodStore;

use super::StartupError;

/// Build the configured store. Redis connection failures are fatal.
pub async fn build_store(settings: &MoodSettings) -> Result<Arc<dyn MoodStore>, StartupError> {
    match settings.store_kind()? {
        StoreKind::Memory => {
            info!(store = %StoreKind::Memory, "using in-memory mood store");
            Ok(Arc::new(InMemoryMoodStore::new()))
        }
        StoreKind::Redis => {
            let config = settings.redis_config();
            info!(
                store = %StoreKind::Redis,
                url = %config.connection_url(),
                keyspace = %config.keyspace(),
                "connecting to redis mood store"
            );
            let store = RedisMoodStore::connect(config).await?;
            Ok(Arc::new(store))
        }
    }
}

/// Wrap `store` in the mood service and expose it through both ports.
pub fn build_http_state(store: Arc<dyn MoodStore>, settings: &MoodSettings) -> HttpState {
    let service = MoodService::new(store, settings.not_found_message());
    HttpState::from_service(Arc::new(service))
}
