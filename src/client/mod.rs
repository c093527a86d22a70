//! Typed client for the billet API.
//!
//! [`AuthClient`] validates credentials locally, issues signup/login
//! requests, and flips the shared [`SessionContext`] after a successful
//! login. Failures carry the server message unchanged so a UI layer can
//! show it verbatim.

pub mod session;
pub mod validate;

pub use self::session::SessionContext;
pub use self::validate::{FieldError, FieldErrors};

use crate::events::EventRecord;
use reqwest::{Client, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use url::Url;
use uuid::Uuid;

static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

/// Candidate credentials for a signup or login submission.
///
/// Transient: exists only for the duration of the request. The password is
/// wrapped in [`SecretString`] so `Debug` output redacts it; it is exposed
/// only while serialising the request body.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }
}

/// Opaque user descriptor returned by the auth endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
}

#[derive(Error, Debug)]
pub enum ClientError {
    /// Client-side validation failures, reported before any network call.
    #[error("{0}")]
    Invalid(FieldErrors),

    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server-rejected submission; `message` is shown to the user unchanged.
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error("unexpected response body: {0}")]
    UnexpectedBody(String),
}

/// Client for the signup/login and event-listing endpoints.
pub struct AuthClient {
    http: Client,
    base_url: Url,
    session: Arc<SessionContext>,
}

impl AuthClient {
    /// Build a client against a base URL like `http://localhost:3000`.
    ///
    /// # Errors
    /// Returns an error if the base URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base_url = Url::parse(base_url)?;
        let http = Client::builder().user_agent(APP_USER_AGENT).build()?;

        Ok(Self {
            http,
            base_url,
            session: Arc::new(SessionContext::default()),
        })
    }

    /// Shared session context; true once a login has succeeded.
    #[must_use]
    pub fn session(&self) -> Arc<SessionContext> {
        Arc::clone(&self.session)
    }

    /// Sign in with the given credentials.
    ///
    /// Validates the credential shape locally first, so malformed input
    /// never reaches the network. On success the session context becomes
    /// authenticated; on failure it is left untouched.
    ///
    /// # Errors
    /// [`ClientError::Invalid`] on validation failures,
    /// [`ClientError::Rejected`] with the server message otherwise.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, ClientError> {
        validate::check(credentials).map_err(ClientError::Invalid)?;

        let user: User = self.post_credentials("/login", credentials).await?;

        debug!("login successful for: {}", user.email);

        self.session.store(user.clone());

        Ok(user)
    }

    /// Register a new account with the given credentials.
    ///
    /// Does not alter the session; callers sign in afterwards.
    ///
    /// # Errors
    /// [`ClientError::Invalid`] on validation failures,
    /// [`ClientError::Rejected`] with the server message otherwise.
    pub async fn sign_up(&self, credentials: &Credentials) -> Result<User, ClientError> {
        validate::check(credentials).map_err(ClientError::Invalid)?;

        self.post_credentials("/signup", credentials).await
    }

    /// Fetch the event listing.
    ///
    /// # Errors
    /// [`ClientError::Rejected`] or [`ClientError::Request`] on failure.
    pub async fn events(&self) -> Result<Vec<EventRecord>, ClientError> {
        let url = self.base_url.join("/events")?;

        let response = self.http.get(url).send().await?;

        Self::parse(response).await
    }

    async fn post_credentials<T: DeserializeOwned>(
        &self,
        path: &str,
        credentials: &Credentials,
    ) -> Result<T, ClientError> {
        let url = self.base_url.join(path)?;

        let body = json!({
            "email": credentials.email,
            "password": credentials.password(),
        });

        let response = self.http.post(url).json(&body).send().await?;

        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            return response
                .json()
                .await
                .map_err(|e| ClientError::UnexpectedBody(e.to_string()));
        }

        // the body is the human-readable message, pass it through unchanged
        let message = match response.text().await {
            Ok(body) if !body.is_empty() => body,
            _ => status.to_string(),
        };

        Err(ClientError::Rejected { status, message })
    }
}
