use async_trait::async_trait;

use crate::domain::{
    error::AuthProviderError,
    models::{account::AccountId, credential::SignupCredentials},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOptions {
    /// Where the confirmation email sends the user back to
    pub email_redirect_to: String,
}

/// Hosted service that creates accounts and sends confirmation emails
#[async_trait]
pub trait AuthProvider {
    /// Create an account.
    ///
    /// `Ok(None)` means the provider accepted the request but did not
    /// return the created user.
    async fn sign_up(
        &self,
        credentials: &SignupCredentials,
        options: &SignUpOptions,
    ) -> Result<Option<AccountId>, AuthProviderError>;
}
