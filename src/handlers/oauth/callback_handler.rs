use crate::error::AuthError;
use crate::models::AppState;
use crate::models::oauth::{CallbackParams, TokenExchange};
use crate::spotify::exchange_code;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use oauth2::AuthorizationCode;
use tracing::{info, warn};

/// `GET /api/auth/spotify/callback`: trades the `code` Spotify redirected
/// with for tokens.
///
/// Responds 200 with `access_token`, `refresh_token` and `expires_in` only.
/// A Spotify rejection is relayed as 400 with Spotify's JSON body as is.
/// Repeated query keys resolve to their first value.
pub async fn callback_handler(
    State(app_state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, AuthError> {
    let params = CallbackParams::from_pairs(pairs);
    if let Some(error) = params.error.as_deref() {
        warn!(error, "Spotify redirected with an authorization error");
    }

    let code = match params.code() {
        Some(code) => AuthorizationCode::new(code.to_string()),
        None => return Err(AuthError::MissingCode),
    };

    let credentials = app_state.config.credentials()?;

    info!("OAuth callback received, exchanging code");
    let outcome = exchange_code(
        &app_state.http,
        &app_state.config.token_url,
        credentials,
        &code,
    )
    .await?;

    let response = match outcome {
        TokenExchange::Granted(token) => Json(token).into_response(),
        TokenExchange::Rejected(body) => (
            StatusCode::BAD_REQUEST,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
    };

    Ok(response)
}
