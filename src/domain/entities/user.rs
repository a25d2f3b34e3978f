//! User entity representing a member of the directory.

use serde_json::{Map, Value};

/// A stored user record.
///
/// `name` is the only field this service interprets. Everything else the
/// client sent at creation time lives in `attributes` and is returned
/// verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub attributes: Map<String, Value>,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, name: String, attributes: Map<String, Value>) -> Self {
        Self {
            id,
            name,
            attributes,
        }
    }
}

/// Input data for creating a user.
///
/// Carries no identifier; the store assigns one on insert.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub attributes: Map<String, Value>,
}
