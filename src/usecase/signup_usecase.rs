use tracing::{debug, error, info, warn};

use crate::domain::{
    error::DomainError,
    models::{
        account::{AccountId, Origin},
        activity::ActivityRecord,
        credential::{EmailAddress, Password, SignupCredentials},
    },
    repositories::activity_repository::ActivityRepository,
    services::auth_provider::{AuthProvider, SignUpOptions},
};

/// Raw submission as it arrives from the form, before validation
#[derive(Default, Clone)]
pub struct SignupInput {
    pub origin: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct SignupUsecase<A: AuthProvider, R: ActivityRepository> {
    auth_provider: A,
    activity_repository: R,
}

impl<A: AuthProvider, R: ActivityRepository> SignupUsecase<A, R> {
    pub fn new(auth_provider: A, activity_repository: R) -> Self {
        Self {
            auth_provider,
            activity_repository,
        }
    }

    /// Validate the submission, create the account and record the signup bonus.
    ///
    /// Checks run in order (origin, email, password) and the first failure
    /// is returned before anything external is called. The activity record
    /// is only written once the provider has returned the new account. If
    /// that write fails the account is left in place.
    pub async fn sign_up(&self, input: SignupInput) -> Result<AccountId, DomainError>
    where
        A: Send + Sync,
        R: Send + Sync,
    {
        let origin = Origin::parse(input.origin.as_deref()).inspect_err(|_| {
            error!("No request origin and no SITE_URL configured");
        })?;
        let credentials = validate(input.email, input.password).inspect_err(|e| {
            debug!(reason = %e, "Rejected signup form");
        })?;

        let options = SignUpOptions {
            email_redirect_to: origin.callback_url(),
        };
        debug!(origin = origin.as_str(), "Creating account");

        let account_id = self
            .auth_provider
            .sign_up(&credentials, &options)
            .await
            .inspect_err(|e| error!(error = %e, "Auth provider sign-up failed"))?
            .ok_or_else(|| {
                warn!("Auth provider accepted sign-up without returning a user");
                DomainError::MissingAccount
            })?;

        // No rollback: the account stays even if this insert fails.
        let record = ActivityRecord::initial_signup(account_id.clone());
        self.activity_repository
            .insert(&record)
            .await
            .inspect_err(|e| {
                error!(
                    account_id = account_id.as_str(),
                    error = %e,
                    "Error initializing user activity"
                )
            })?;

        info!(account_id = account_id.as_str(), "Account created");
        Ok(account_id)
    }
}

fn validate(
    email: Option<String>,
    password: Option<String>,
) -> Result<SignupCredentials, DomainError> {
    Ok(SignupCredentials {
        email: EmailAddress::parse(email)?,
        password: Password::parse(password)?,
    })
}
