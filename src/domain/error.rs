use thiserror::Error;

/// Errors surfaced to the user as the `message` shown on the signup form.
///
/// The `Display` text is exactly what the form page renders, so variants
/// that carry internal detail keep it out of the message.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Server error: Missing origin")]
    MissingOrigin,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password must be at least 6 characters long")]
    WeakPassword,

    /// The auth provider refused to create the account.
    #[error("{0}")]
    SignUpRejected(String),

    /// The account exists but the signup activity could not be written.
    #[error("{0}")]
    Repository(#[from] RepositoryError),

    /// The provider reported success without returning a user.
    #[error("Server error occurred")]
    MissingAccount,

    #[error("Server error occurred")]
    Unexpected(String),
}

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0}")]
    DatabaseError(String),

    #[error("Invalid account id: {0}")]
    InvalidAccountId(String),
}

/// Failures reported by an [`AuthProvider`](crate::domain::services::auth_provider::AuthProvider).
#[derive(Debug, Error)]
pub enum AuthProviderError {
    /// The provider answered and rejected the request with a message.
    #[error("{0}")]
    Rejected(String),

    /// The provider could not be reached or its answer could not be read.
    #[error("Auth provider unavailable: {0}")]
    Transport(String),
}

impl From<AuthProviderError> for DomainError {
    fn from(err: AuthProviderError) -> Self {
        match err {
            AuthProviderError::Rejected(message) => DomainError::SignUpRejected(message),
            AuthProviderError::Transport(detail) => DomainError::Unexpected(detail),
        }
    }
}
