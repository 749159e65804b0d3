use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Identifier the auth provider assigned to a newly created account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Externally visible base URL of the site (scheme, host and port)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Origin(String);

impl Origin {
    /// Path the auth provider sends users to after they confirm their email.
    pub const CALLBACK_PATH: &'static str = "/auth/callback";

    pub fn parse(value: Option<&str>) -> Result<Self, DomainError> {
        let value = value
            .map(|v| v.trim().trim_end_matches('/'))
            .filter(|v| !v.is_empty())
            .ok_or(DomainError::MissingOrigin)?;
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn callback_url(&self) -> String {
        format!("{}{}", self.0, Self::CALLBACK_PATH)
    }
}
