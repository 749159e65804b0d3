use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{Query, State, rejection::FormRejection},
    http::{HeaderMap, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    domain::{
        repositories::activity_repository::ActivityRepository,
        services::auth_provider::AuthProvider,
    },
    presentation::templates::signup_page,
    usecase::signup_usecase::{SignupInput, SignupUsecase},
};

pub const SIGNUP_PATH: &str = "/signup";
pub const HOME_PATH: &str = "/homePage";

// Request

/// query string of the signup page
#[derive(Serialize, Deserialize, Default)]
pub struct SignupPageQuery {
    pub message: Option<String>,
}

impl SignupPageQuery {
    /// first `message` wins when the parameter is repeated
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let message = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "message").then_some(value));
        Self { message }
    }
}

/// urlencoded body posted by the signup form
#[derive(Serialize, Deserialize, Default)]
pub struct SignupForm {
    pub email: Option<String>,
    pub password: Option<String>,
}

// Response

/// Where the browser goes after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupOutcome {
    target: &'static str,
    message: Option<String>,
}

impl SignupOutcome {
    pub fn home() -> Self {
        Self {
            target: HOME_PATH,
            message: None,
        }
    }

    /// back to the form, showing `message`
    pub fn form_error(message: impl Into<String>) -> Self {
        Self {
            target: SIGNUP_PATH,
            message: Some(message.into()),
        }
    }

    pub fn location(&self) -> String {
        match &self.message {
            Some(message) => format!("{}?message={}", self.target, urlencoding::encode(message)),
            None => self.target.to_string(),
        }
    }
}

impl IntoResponse for SignupOutcome {
    fn into_response(self) -> Response {
        Redirect::to(&self.location()).into_response()
    }
}

/* Router Function and Handler Function */

/// function return Router object serving the signup page and form
///
/// `site_url` stands in for the request origin when the browser sends none.
pub fn create_signup_router<
    A: AuthProvider + Send + Sync + 'static + Clone,
    R: ActivityRepository + Send + Sync + 'static + Clone,
>(
    signup_service: SignupUsecase<A, R>,
    site_url: Option<String>,
) -> Router {
    let state = AppState {
        signup_service: Arc::new(signup_service),
        site_url: site_url.map(Arc::from),
    };

    Router::new()
        .route("/", get(|| async { Redirect::to(SIGNUP_PATH) }))
        .route(SIGNUP_PATH, get(signup_page_handler).post(signup::<A, R>))
        .with_state(state)
}

#[derive(Clone)]
pub struct AppState<A: AuthProvider, R: ActivityRepository> {
    pub signup_service: Arc<SignupUsecase<A, R>>,
    pub site_url: Option<Arc<str>>,
}

// handler function

/// handler function for the signup page
async fn signup_page_handler(Query(pairs): Query<Vec<(String, String)>>) -> Html<String> {
    let query = SignupPageQuery::from_pairs(pairs);
    Html(signup_page::render(query.message.as_deref()))
}

/// handler function for the signup form, always answers with a redirect
async fn signup<A: AuthProvider + Send + Sync, R: ActivityRepository + Send + Sync>(
    State(state): State<AppState<A, R>>,
    headers: HeaderMap,
    form: Result<Form<SignupForm>, FormRejection>,
) -> SignupOutcome {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            warn!(%rejection, "Unreadable signup form");
            SignupForm::default()
        }
    };

    let input = SignupInput {
        origin: request_origin(&headers).or_else(|| state.site_url.as_deref().map(str::to_string)),
        email: form.email,
        password: form.password,
    };

    match state.signup_service.sign_up(input).await {
        Ok(_) => SignupOutcome::home(),
        Err(e) => SignupOutcome::form_error(e.to_string()),
    }
}

/// `Origin` header value; browsers send the literal `null` for opaque origins
fn request_origin(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty() && *value != "null")
        .map(str::to_string)
}
