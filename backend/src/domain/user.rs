//! User record and its JSON contract.
//!
//! A [`User`] may be constructed in an invalid state so that inbound adapters
//! can decode a payload first and run [`User::is_valid`] second. The store
//! assigns identifiers; a decoded payload without an `id` carries `0`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Errors raised while decoding a user payload.
#[derive(Debug, thiserror::Error)]
pub enum UserDecodeError {
    /// The payload is not JSON, or a required field is missing or mistyped.
    #[error("malformed user payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Application user.
///
/// ## Invariants
/// A record is valid when `name` is non-empty, `email` is non-empty and
/// contains `@`, and `age` is positive. Validity is checked on demand, not on
/// construction.
///
/// ## Serialisation
/// Field names are `id`, `name`, `email` and `age`. `id` defaults to `0` when
/// absent; the other three are required.
///
/// # Examples
/// ```
/// use backend::domain::User;
///
/// let user = User::from_json(br#"{"name":"Ada","email":"ada@example.com","age":36}"#)
///     .expect("well-formed payload");
/// assert_eq!(user.id(), 0);
/// assert!(user.is_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    id: i64,
    name: String,
    email: String,
    age: i64,
}

impl User {
    /// Build a record from its parts without validating them.
    pub fn new(id: i64, name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Return a copy of this record carrying `id`.
    #[must_use]
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Store-assigned identifier, `0` until the record is stored.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Contact address.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in years.
    pub fn age(&self) -> i64 {
        self.age
    }

    /// Copy the mutable fields of `other` onto `self`, keeping `self.id`.
    pub(crate) fn overwrite_fields(&mut self, other: &Self) {
        self.name.clone_from(&other.name);
        self.email.clone_from(&other.email);
        self.age = other.age;
    }

    /// Report whether the record satisfies the field rules.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::User;
    ///
    /// assert!(!User::new(0, "Ada", "no-at-sign", 36).is_valid());
    /// ```
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty() && self.email.contains('@') && self.age > 0
    }

    /// Render the record as a JSON object.
    pub fn to_json(&self) -> Value {
        serde_json::json!({
            "id": self.id,
            "name": self.name,
            "email": self.email,
            "age": self.age,
        })
    }

    /// Decode a record from an already-parsed JSON value.
    ///
    /// # Errors
    /// Returns [`UserDecodeError::Malformed`] when `name`, `email` or `age` is
    /// missing or of the wrong type, or when the value is not an object.
    pub fn from_value(value: Value) -> Result<Self, UserDecodeError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Decode a record from raw request bytes.
    ///
    /// # Errors
    /// Returns [`UserDecodeError::Malformed`] when the bytes are not JSON or
    /// do not describe a user.
    pub fn from_json(bytes: &[u8]) -> Result<Self, UserDecodeError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests;
