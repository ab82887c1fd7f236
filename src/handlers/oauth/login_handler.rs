use crate::error::AuthError;
use crate::models::AppState;
use crate::spotify::authorize_url;
use axum::{
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::info;

/// `GET /api/auth/spotify/login`: 302 to Spotify's consent page.
pub async fn login_handler(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AuthError> {
    let url = authorize_url(&app_state.config)?;

    info!("redirecting to Spotify authorization");
    Ok((StatusCode::FOUND, [(header::LOCATION, url.to_string())]))
}
