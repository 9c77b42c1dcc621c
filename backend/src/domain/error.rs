//! Domain-level error outcomes for the mood use-cases.
//!
//! These errors are transport agnostic. Inbound adapters match on the variant
//! to pick a protocol status; the domain never decides one.

use thiserror::Error;

use super::UserName;
use super::ports::MoodStoreError;

/// Failure outcomes of [`crate::domain::MoodService`].
///
/// # Examples
/// ```
/// use mood_service::domain::{MoodError, UserName};
/// use mood_service::domain::ports::MoodStoreError;
///
/// let user = UserName::new("stehrn").expect("valid user");
/// let missing = MoodError::not_found(user, "mood not set");
/// assert!(missing.is_not_found());
/// assert_eq!(missing.to_string(), "mood not set");
///
/// let outage = MoodError::from(MoodStoreError::connection("refused"));
/// assert!(!outage.is_not_found());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodError {
    /// The user has never set a mood. Carries the operator-configured message.
    #[error("{message}")]
    NotFound {
        /// User whose mood was requested.
        user: UserName,
        /// Text reported to the caller in place of a mood.
        message: String,
    },
    /// The backing store could not complete the operation.
    #[error("mood store unavailable: {0}")]
    BackendUnavailable(#[from] MoodStoreError),
}

impl MoodError {
    /// Convenience constructor for [`MoodError::NotFound`].
    pub fn not_found(user: UserName, message: impl Into<String>) -> Self {
        Self::NotFound {
            user,
            message: message.into(),
        }
    }

    /// Return true when the user simply has no mood yet.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
