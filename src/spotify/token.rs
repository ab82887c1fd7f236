use base64::{Engine, engine::general_purpose::STANDARD};
use oauth2::{AuthorizationCode, TokenUrl};
use reqwest::{Client, header::AUTHORIZATION};
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::models::Credentials;
use crate::models::oauth::{SpotifyToken, TokenExchange};

/// Exchanges an authorization code at Spotify's token endpoint.
///
/// Sends one `POST` with HTTP Basic client authentication and a form body of
/// `grant_type`, `code` and `redirect_uri`. The response body must be JSON
/// whatever the status. A non-2xx status yields [`TokenExchange::Rejected`]
/// carrying the body bytes untouched; any 2xx is [`TokenExchange::Granted`].
/// No timeout and no retry.
pub async fn exchange_code(
    http: &Client,
    token_url: &TokenUrl,
    credentials: Credentials<'_>,
    code: &AuthorizationCode,
) -> Result<TokenExchange, AuthError> {
    let basic = STANDARD.encode(format!(
        "{}:{}",
        credentials.client_id.as_str(),
        credentials.client_secret.secret()
    ));

    let form = [
        ("grant_type", "authorization_code"),
        ("code", code.secret().as_str()),
        ("redirect_uri", credentials.redirect_url.as_str()),
    ];

    debug!(token_url = %token_url.as_str(), "exchanging authorization code");
    let response = http
        .post(token_url.url().clone())
        .header(AUTHORIZATION, format!("Basic {}", basic))
        .form(&form)
        .send()
        .await?;

    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        serde_json::from_slice::<IgnoredAny>(&body)?;
        warn!(%status, "Spotify rejected the token exchange");
        return Ok(TokenExchange::Rejected(body));
    }

    let token: SpotifyToken = serde_json::from_slice(&body)?;
    Ok(TokenExchange::Granted(token))
}
