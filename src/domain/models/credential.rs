use std::{fmt, sync::LazyLock};

use regex::Regex;
use serde::Serialize;

use crate::domain::error::DomainError;

/// Shortest password the signup form accepts.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// One email character: anything but `@` and the whitespace set browsers
/// use for `\s` (which includes U+FEFF and excludes U+0085).
const EMAIL_CHAR: &str = r"[^\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}@]";

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{c}+@{c}+\\.{c}+$", c = EMAIL_CHAR))
        .expect("EMAIL_REGEX is a valid regex pattern")
});

/// Value object for an email address that passed the minimal syntax check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Accepts `local@domain.tld` where no part contains whitespace or `@`.
    /// Anything else, including a missing field, is `InvalidEmail`.
    pub fn parse(value: Option<String>) -> Result<Self, DomainError> {
        match value {
            Some(value) if EMAIL_REGEX.is_match(&value) => Ok(Self(value)),
            _ => Err(DomainError::InvalidEmail),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Plain text password, forwarded to the auth provider and never stored here
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub fn parse(value: Option<String>) -> Result<Self, DomainError> {
        match value {
            // length in UTF-16 code units, as browsers count it
            Some(value) if value.encode_utf16().count() >= MIN_PASSWORD_LENGTH => Ok(Self(value)),
            _ => Err(DomainError::WeakPassword),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

/// Validated pair sent to the auth provider
#[derive(Debug, Clone)]
pub struct SignupCredentials {
    pub email: EmailAddress,
    pub password: Password,
}
