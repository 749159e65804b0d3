use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::Value;

use crate::domain::{
    error::AuthProviderError,
    models::{account::AccountId, credential::SignupCredentials},
    services::auth_provider::{AuthProvider, SignUpOptions},
};

const SIGNUP_PATH: &str = "/auth/v1/signup";

#[derive(Serialize)]
struct SignUpBody<'a> {
    email: &'a str,
    password: &'a str,
}

/// Client for the hosted GoTrue auth API
#[derive(Clone)]
pub struct SupabaseAuthProvider {
    client: Client,
    base_url: String,
    api_key: String,
}

impl SupabaseAuthProvider {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, AuthProviderError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AuthProviderError::Transport(e.to_string()))?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    pub fn with_client(
        client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl AuthProvider for SupabaseAuthProvider {
    async fn sign_up(
        &self,
        credentials: &SignupCredentials,
        options: &SignUpOptions,
    ) -> Result<Option<AccountId>, AuthProviderError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, SIGNUP_PATH))
            .query(&[("redirect_to", options.email_redirect_to.as_str())])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&SignUpBody {
                email: credentials.email.as_str(),
                password: credentials.password.as_str(),
            })
            .send()
            .await
            .map_err(|e| AuthProviderError::Transport(e.to_string()))?;

        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| AuthProviderError::Transport(e.to_string()))?;

        if !status.is_success() {
            let body = serde_json::from_slice::<Value>(&bytes).unwrap_or(Value::Null);
            return Err(AuthProviderError::Rejected(error_message(&body, status)));
        }

        let body = serde_json::from_slice::<Value>(&bytes).map_err(|e| {
            AuthProviderError::Transport(format!("unreadable sign-up response: {}", e))
        })?;
        Ok(created_user_id(&body))
    }
}

/// GoTrue has used several error shapes over time; take the first one present.
fn error_message(body: &Value, status: StatusCode) -> String {
    ["msg", "message", "error_description", "error"]
        .iter()
        .find_map(|key| body.get(key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Sign-up failed")
                .to_string()
        })
}

/// With email confirmation on the body is the user itself; with
/// autoconfirm it is a session carrying `user`.
fn created_user_id(body: &Value) -> Option<AccountId> {
    let user = match body.get("user") {
        Some(user) => user,
        None => body,
    };
    user.get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(AccountId::new)
}
