//! REST API client for the material system backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Transport`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every method returns a `Result` with an explicit error kind. The session
//! store and the navigation guard catch these at the action boundary and turn
//! them into notifications or degraded behavior; nothing here panics.

#![allow(clippy::unused_async)]

use thiserror::Error;

use super::types::{Category, Credentials, LoginData, RegisterRequest, User};

/// Failure modes of a backend call.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a usable response.
    #[error("network error: {0}")]
    Transport(String),
    /// The backend answered with a non-success application code.
    #[error("server error {code}: {msg}")]
    Server { code: i64, msg: String },
    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
    /// The login response carried a token but no user profile followed.
    #[error("no user profile available")]
    MissingUser,
}

impl ApiError {
    /// The server-supplied message, when there is a meaningful one to show.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { msg, .. } if !msg.is_empty() => Some(msg),
            _ => None,
        }
    }
}

/// Backend operations the routing and session layers depend on.
///
/// The credential for `current_user` is passed per request rather than held
/// in ambient client state, so tests and alternative transports can supply
/// their own.
#[allow(async_fn_in_trait)]
pub trait ApiClient {
    /// `POST /user/login` — exchange credentials for a token.
    async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError>;

    /// `GET /user` — fetch the profile for the bearer of `token`.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;

    /// `POST /user/register` — create an account.
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError>;

    /// `GET /category` — list the content categories that drive dynamic routes.
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
}

impl<T: ApiClient> ApiClient for &T {
    async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        (**self).login(credentials).await
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        (**self).current_user(token).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        (**self).register(request).await
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        (**self).categories().await
    }
}

/// `gloo-net` backed client used in the browser build.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooApi;

impl ApiClient for GlooApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginData, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/user/login")
                .json(credentials)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let envelope: super::types::ApiEnvelope<LoginData> = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            envelope.into_data()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/user")
                .header("Authorization", &format!("Bearer {token}"))
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let envelope: super::types::ApiEnvelope<User> = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            envelope.into_data()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post("/user/register")
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let envelope: super::types::ApiEnvelope<serde_json::Value> = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            envelope.check_code()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }

    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get("/category")
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let envelope: super::types::ApiEnvelope<Vec<Category>> = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            envelope.into_data()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}
