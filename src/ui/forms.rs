use crate::models::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::utils::error::FieldErrors;
use crate::utils::validation::validate_fields;
use serde::Deserialize;

/// Unsaved form state for a user
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UserDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
}

impl UserDraft {
    pub fn validate(&self) -> FieldErrors {
        validate_fields(
            Some(self.name.as_str()),
            Some(self.email.as_str()),
            Some(self.address.as_str()),
        )
    }

    /// The create form sends the draft as typed
    pub fn to_create_request(&self) -> CreateUserRequest {
        CreateUserRequest {
            name: self.name.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
        }
    }

    /// The edit form sends trimmed values and a lowercased email
    pub fn to_update_request(&self) -> UpdateUserRequest {
        UpdateUserRequest {
            name: Some(self.name.trim().to_string()),
            email: Some(self.email.trim().to_lowercase()),
            address: Some(self.address.trim().to_string()),
        }
    }
}

impl From<UserResponse> for UserDraft {
    fn from(user: UserResponse) -> Self {
        Self {
            name: user.name,
            email: user.email,
            address: user.address,
        }
    }
}
