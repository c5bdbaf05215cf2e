#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::net::api::ApiError;

/// Response code the backend uses to signal success.
pub const CODE_OK: i64 = 200;

/// Envelope every backend endpoint wraps its payload in.
///
/// The backend reports application-level failures through `code`/`msg`
/// inside an HTTP 200 response, so transport success alone is not enough.
/// Some endpoints (the category list) omit `code` entirely; those default
/// to success.
#[derive(Clone, Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    #[serde(default = "default_code")]
    pub code: i64,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub data: Option<T>,
}

fn default_code() -> i64 {
    CODE_OK
}

impl<T> ApiEnvelope<T> {
    /// Unwrap the payload, converting a non-success `code` into
    /// [`ApiError::Server`].
    pub fn into_data(self) -> Result<T, ApiError> {
        self.check_code()?;
        self.data
            .ok_or_else(|| ApiError::Decode("response envelope has no data".to_owned()))
    }

    /// Check only the status code, for endpoints whose payload is irrelevant.
    pub fn check_code(&self) -> Result<(), ApiError> {
        if self.code == CODE_OK {
            Ok(())
        } else {
            Err(ApiError::Server {
                code: self.code,
                msg: self.msg.clone(),
            })
        }
    }
}

/// Credentials posted to `POST /user/login`.
#[derive(Clone, Debug, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Payload of a successful login response.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginData {
    pub token: String,
}

/// Fields posted to `POST /user/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// The authenticated user's profile as returned by `GET /user`.
///
/// Backend fields the client does not model are preserved in `extra` so a
/// storage round-trip does not drop them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub is_admin: i64,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A backend content category; each one becomes a routed section of the app.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}
