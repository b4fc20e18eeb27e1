use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::is_blank;
use crate::util::ValidationError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginRole {
    #[default]
    User,
    Admin,
    Seller,
}

impl fmt::Display for LoginRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoginRole::User => "user",
            LoginRole::Admin => "admin",
            LoginRole::Seller => "seller",
        };
        f.write_str(name)
    }
}

/// Single-step sign-in form shared by the user, admin and seller pages.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    pub role: LoginRole,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember_me: bool,
}

impl LoginForm {
    pub fn new(role: LoginRole) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut missing = Vec::new();
        if is_blank(&self.email) {
            missing.push("Email");
        }
        if is_blank(&self.password) {
            missing.push("Password");
        }
        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::MissingFields(missing))
        }
    }
}
