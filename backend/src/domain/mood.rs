//! Mood record data model.
//!
//! A [`MoodRecord`] pairs a [`UserName`] with the user's current mood. The
//! user name doubles as the storage key, so every backend addresses a record
//! by [`MoodRecord::key`].

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned when constructing mood values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoodValidationError {
    /// The user identifier is the empty string.
    #[error("user name must not be empty")]
    EmptyUser,
}

/// Identifier of the user owning a mood.
///
/// Any non-empty string is accepted; the value is stored verbatim.
///
/// # Examples
/// ```
/// use mood_service::domain::UserName;
///
/// let user = UserName::new("stehrn").expect("valid user");
/// assert_eq!(user.as_ref(), "stehrn");
/// assert!(UserName::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(value: impl Into<String>) -> Result<Self, MoodValidationError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(MoodValidationError::EmptyUser);
        }
        Ok(Self(raw))
    }

    /// Borrow the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = MoodValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// The current mood of a single user.
///
/// ## Invariants
/// - The record key always equals `user`.
/// - Records are immutable; [`MoodRecord::with_mood`] yields a new value.
///
/// # Examples
/// ```
/// use mood_service::domain::{MoodRecord, UserName};
///
/// let user = UserName::new("stehrn").expect("valid user");
/// let record = MoodRecord::new(user, "happy");
/// assert_eq!(record.key(), "stehrn");
/// assert_eq!(record.mood(), "happy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    user: UserName,
    mood: String,
}

impl MoodRecord {
    /// Build a record for `user`; `mood` is kept verbatim.
    pub fn new(user: UserName, mood: impl Into<String>) -> Self {
        Self {
            user,
            mood: mood.into(),
        }
    }

    /// Owner of the mood.
    pub fn user(&self) -> &UserName {
        &self.user
    }

    /// The mood text exactly as it was written.
    pub fn mood(&self) -> &str {
        self.mood.as_str()
    }

    /// Storage key for this record.
    pub fn key(&self) -> &str {
        self.user.as_str()
    }

    /// Produce a replacement record for the same user.
    #[must_use]
    pub fn with_mood(self, mood: impl Into<String>) -> Self {
        Self::new(self.user, mood)
    }

    /// Split the record into its user and mood.
    pub fn into_parts(self) -> (UserName, String) {
        (self.user, self.mood)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use serde_json::json;

    #[fixture]
    fn stehrn() -> UserName {
        UserName::new("stehrn").expect("valid user")
    }

    #[rstest]
    fn user_name_rejects_empty_input() {
        let err = UserName::new("").expect_err("empty user rejected");
        assert_eq!(err, MoodValidationError::EmptyUser);
    }

    #[rstest]
    #[case(" ")]
    #[case("user with spaces")]
    #[case("ünïcødé")]
    fn user_name_keeps_any_non_empty_value(#[case] raw: &str) {
        let user = UserName::new(raw).expect("non-empty user accepted");
        assert_eq!(user.as_str(), raw);
    }

    #[rstest]
    fn record_key_matches_user(stehrn: UserName) {
        let record = MoodRecord::new(stehrn.clone(), "happy");
        assert_eq!(record.key(), stehrn.as_str());
        assert_eq!(record.user(), &stehrn);
    }

    #[rstest]
    fn with_mood_keeps_user_and_replaces_mood(stehrn: UserName) {
        let original = MoodRecord::new(stehrn.clone(), "happy");
        let updated = original.clone().with_mood("sad");

        assert_eq!(updated.user(), &stehrn);
        assert_eq!(updated.mood(), "sad");
        assert_eq!(original.mood(), "happy");
    }

    #[rstest]
    fn empty_mood_is_kept_verbatim(stehrn: UserName) {
        let record = MoodRecord::new(stehrn, "");
        assert_eq!(record.mood(), "");
    }

    #[rstest]
    fn record_serialises_with_user_and_mood_fields(stehrn: UserName) {
        let value = serde_json::to_value(MoodRecord::new(stehrn, "happy")).expect("serialise");
        assert_eq!(value, json!({ "user": "stehrn", "mood": "happy" }));
    }

    #[rstest]
    fn record_deserialisation_rejects_empty_user() {
        let result = serde_json::from_value::<MoodRecord>(json!({ "user": "", "mood": "ok" }));
        assert!(result.is_err());
    }
}
