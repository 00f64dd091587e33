//! HTTP error mapping for the runtime-config endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::warn;

use crate::error::Error;

/// A failure rendered as `{ "message": ... }`.
///
/// Validation problems are the caller's to fix (400); everything else is a
/// deployment or provider problem (500).
#[derive(Debug)]
pub struct ApiError(Error);

impl ApiError {
    /// Status code this error maps to.
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self.0, "runtime config request failed");

        (status, Json(json!({ "message": self.0.to_string() }))).into_response()
    }
}
