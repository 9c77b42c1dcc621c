//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports ([`MoodStore`]) describe what the domain needs from storage;
//! driving ports ([`MoodQuery`], [`MoodCommand`]) describe what inbound
//! adapters may ask of the domain.

mod macros;
pub(crate) use macros::define_port_error;

mod mood_command;
mod mood_query;
mod mood_store;

#[cfg(test)]
pub use mood_command::MockMoodCommand;
pub use mood_command::MoodCommand;
#[cfg(test)]
pub use mood_query::MockMoodQuery;
pub use mood_query::MoodQuery;
#[cfg(test)]
pub use mood_store::MockMoodStore;
pub use mood_store::{MoodStore, MoodStoreError};
