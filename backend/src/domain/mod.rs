//! Domain primitives, services, and ports.
//!
//! Purpose: hold the mood record model and the not-found policy without any
//! knowledge of HTTP or storage technology. Adapters depend on this module,
//! never the other way round.
//!
//! Public surface:
//! - `MoodRecord` / `UserName`: the stored value and its key.
//! - `MoodError`: tagged failure outcome.
//! - `MoodService`: implementation of the driving ports.

pub mod error;
pub mod mood;
pub mod mood_service;
pub mod ports;

pub use self::error::MoodError;
pub use self::mood::{MoodRecord, MoodValidationError, UserName};
pub use self::mood_service::MoodService;
