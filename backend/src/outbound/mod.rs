//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **memory**: process-local [`MoodStore`](crate::domain::ports::MoodStore)
//!   used by tests and local runs
//! - **redis**: pooled Redis hash storage for production
//!
//! Adapters are thin translators between domain types and the backend's
//! representation. They contain no business logic.

pub mod memory;
pub mod redis;
