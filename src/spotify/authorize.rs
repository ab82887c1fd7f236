use oauth2::url::Url;

use crate::models::{AppConfig, ConfigError};

/// Permissions requested on every login, in request order.
pub const SCOPES: [&str; 5] = [
    "playlist-modify-private",
    "playlist-modify-public",
    "user-read-private",
    "user-read-recently-played",
    "user-top-read",
];

/// Builds the Authorization Code flow URL the browser is sent to.
///
/// Fails if the client id or redirect URI is not configured. No state or
/// PKCE parameters are added.
pub fn authorize_url(config: &AppConfig) -> Result<Url, ConfigError> {
    let client_id = config.client_id()?;
    let redirect_url = config.redirect_url()?;

    let mut url = config.authorize_url.url().clone();
    url.query_pairs_mut()
        .append_pair("client_id", client_id.as_str())
        .append_pair("response_type", "code")
        .append_pair("redirect_uri", redirect_url.as_str())
        .append_pair("scope", &SCOPES.join(" "));

    Ok(url)
}
