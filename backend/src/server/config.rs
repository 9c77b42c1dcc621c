//! HTTP server configuration object.

use std::net::SocketAddr;

use mood_service::inbound::http::state::HttpState;

/// Everything `create_server` needs besides the health flags.
pub struct ServerConfig {
    pub(crate) http_state: HttpState,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) body_limit: usize,
}

impl ServerConfig {
    /// Pair the handler state with the listen address and request body cap.
    #[must_use]
    pub fn new(http_state: HttpState, bind_addr: SocketAddr, body_limit: usize) -> Self {
        Self {
            http_state,
            bind_addr,
            body_limit,
        }
    }
}
