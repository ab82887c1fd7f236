use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::models::ConfigError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failures while serving the OAuth endpoints.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("missing authorization code")]
    MissingCode,
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("token request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("token response was not valid: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingCode => StatusCode::BAD_REQUEST,
            AuthError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AuthError::Transport(_) | AuthError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
        }
    }

    // Config details stay in the server log.
    fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingCode => "Missing authorization code",
            AuthError::Config(_) => "Server configuration error",
            AuthError::Transport(_) => "Failed to reach Spotify",
            AuthError::MalformedResponse(_) => "Invalid response from Spotify",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "auth request failed");
        }

        let body = Json(ErrorResponse {
            error: self.public_message().to_string(),
        });

        (status, body).into_response()
    }
}
