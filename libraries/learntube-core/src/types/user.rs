/// User domain type
use crate::error::{LearnTubeError, Result};
use crate::types::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Display name
    pub name: String,

    /// Login email, stored lowercase
    pub email: String,

    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Data for creating a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUser {
    pub name: String,
    pub email: String,
}

impl CreateUser {
    /// Validate and normalize name and email
    pub fn new(name: &str, email: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LearnTubeError::validation("Name cannot be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            email: normalize_email(email)?,
        })
    }
}

/// Lowercase and sanity-check an email address
pub fn normalize_email(email: &str) -> Result<String> {
    let email = email.trim().to_lowercase();
    let valid = email
        .split_once('@')
        .is_some_and(|(local, domain)| {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        });

    if !valid || email.chars().any(char::is_whitespace) {
        return Err(LearnTubeError::validation(format!(
            "Invalid email address: {}",
            email
        )));
    }
    Ok(email)
}
