//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use validator::Validate;

use crate::domain::entities::{NewUser, User};

/// Request to create a user.
///
/// `name` is the only interpreted field. Any additional fields are captured
/// verbatim via `flatten` and stored alongside the record.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 255, message = "name must be 1-255 characters"))]
    pub name: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(request: CreateUserRequest) -> Self {
        NewUser {
            name: request.name,
            attributes: request.attributes,
        }
    }
}

/// JSON representation of a stored user.
///
/// Serializes to the creation payload plus the assigned identifier; the
/// opaque attributes are flattened back to top level.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,

    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            attributes: user.attributes,
        }
    }
}
