use std::net::SocketAddr;

use oauth2::url::ParseError;
use oauth2::{AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use thiserror::Error;

use crate::spotify::{AUTHORIZE_ENDPOINT, TOKEN_ENDPOINT};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";
pub const REDIRECT_URI_VAR: &str = "SPOTIFY_REDIRECT_URI";
pub const AUTHORIZE_URL_VAR: &str = "SPOTIFY_AUTHORIZE_URL";
pub const TOKEN_URL_VAR: &str = "SPOTIFY_TOKEN_URL";
pub const BIND_ADDR_VAR: &str = "BIND_ADDR";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} environment variable is required")]
    Missing(&'static str),
    #[error("{name} is not a valid URL: {source}")]
    InvalidUrl {
        name: &'static str,
        #[source]
        source: ParseError,
    },
    #[error("BIND_ADDR is not a valid socket address: {0}")]
    InvalidBindAddr(#[from] std::net::AddrParseError),
}

/// Process configuration, loaded once at startup.
///
/// Spotify credentials are optional here so the server can still start and
/// answer with a configuration error per request; [`AppConfig::credentials`]
/// is the gate every OAuth operation goes through.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub client_id: Option<ClientId>,
    pub client_secret: Option<ClientSecret>,
    pub redirect_url: Option<RedirectUrl>,
    pub authorize_url: AuthUrl,
    pub token_url: TokenUrl,
    pub bind_addr: SocketAddr,
}

/// The full credential set required by the token exchange.
#[derive(Debug, Clone, Copy)]
pub struct Credentials<'a> {
    pub client_id: &'a ClientId,
    pub client_secret: &'a ClientSecret,
    pub redirect_url: &'a RedirectUrl,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        use dotenvy::dotenv;
        use std::env;

        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty
    /// values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let client_id = var(CLIENT_ID_VAR).map(ClientId::new);
        let client_secret = var(CLIENT_SECRET_VAR).map(ClientSecret::new);
        let redirect_url = var(REDIRECT_URI_VAR)
            .map(|value| parse_url(REDIRECT_URI_VAR, value, RedirectUrl::new))
            .transpose()?;

        let authorize_url = parse_url(
            AUTHORIZE_URL_VAR,
            var(AUTHORIZE_URL_VAR).unwrap_or_else(|| AUTHORIZE_ENDPOINT.to_string()),
            AuthUrl::new,
        )?;
        let token_url = parse_url(
            TOKEN_URL_VAR,
            var(TOKEN_URL_VAR).unwrap_or_else(|| TOKEN_ENDPOINT.to_string()),
            TokenUrl::new,
        )?;

        let bind_addr = var(BIND_ADDR_VAR)
            .as_deref()
            .unwrap_or(DEFAULT_BIND_ADDR)
            .parse()?;

        Ok(Self {
            client_id,
            client_secret,
            redirect_url,
            authorize_url,
            token_url,
            bind_addr,
        })
    }

    pub fn client_id(&self) -> Result<&ClientId, ConfigError> {
        self.client_id
            .as_ref()
            .ok_or(ConfigError::Missing(CLIENT_ID_VAR))
    }

    pub fn redirect_url(&self) -> Result<&RedirectUrl, ConfigError> {
        self.redirect_url
            .as_ref()
            .ok_or(ConfigError::Missing(REDIRECT_URI_VAR))
    }

    pub fn credentials(&self) -> Result<Credentials<'_>, ConfigError> {
        let client_id = self.client_id()?;
        let client_secret = self
            .client_secret
            .as_ref()
            .ok_or(ConfigError::Missing(CLIENT_SECRET_VAR))?;
        let redirect_url = self.redirect_url()?;

        Ok(Credentials {
            client_id,
            client_secret,
            redirect_url,
        })
    }

    /// Names of the Spotify variables that are not set.
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.client_id.is_none() {
            missing.push(CLIENT_ID_VAR);
        }
        if self.client_secret.is_none() {
            missing.push(CLIENT_SECRET_VAR);
        }
        if self.redirect_url.is_none() {
            missing.push(REDIRECT_URI_VAR);
        }
        missing
    }
}

fn parse_url<T>(
    name: &'static str,
    value: String,
    parse: fn(String) -> Result<T, ParseError>,
) -> Result<T, ConfigError> {
    parse(value).map_err(|source| ConfigError::InvalidUrl { name, source })
}

#[cfg(test)]
impl AppConfig {
    /// Complete configuration whose Spotify endpoints live under `base_url`.
    pub fn for_tests(base_url: &str) -> Self {
        Self::from_lookup(|key| match key {
            CLIENT_ID_VAR => Some("client".to_string()),
            CLIENT_SECRET_VAR => Some("secret".to_string()),
            REDIRECT_URI_VAR => Some("http://localhost:3000/api/auth/spotify/callback".to_string()),
            AUTHORIZE_URL_VAR => Some(format!("{}/authorize", base_url)),
            TOKEN_URL_VAR => Some(format!("{}/api/token", base_url)),
            _ => None,
        })
        .unwrap()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_full_configuration() {
        let config = AppConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "client"),
            (CLIENT_SECRET_VAR, "secret"),
            (REDIRECT_URI_VAR, "http://localhost:3000/api/auth/spotify/callback"),
        ]))
        .unwrap();

        let credentials = config.credentials().unwrap();
        assert_eq!(credentials.client_id.as_str(), "client");
        assert_eq!(credentials.client_secret.secret(), "secret");
        assert_eq!(
            credentials.redirect_url.as_str(),
            "http://localhost:3000/api/auth/spotify/callback"
        );
        assert!(config.missing_credentials().is_empty());
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.authorize_url.as_str(), AUTHORIZE_ENDPOINT);
        assert_eq!(config.token_url.as_str(), TOKEN_ENDPOINT);
        assert_eq!(config.bind_addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(
            config.missing_credentials(),
            vec![CLIENT_ID_VAR, CLIENT_SECRET_VAR, REDIRECT_URI_VAR]
        );
    }

    #[test]
    fn test_empty_values_are_missing() {
        let config = AppConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, ""),
            (CLIENT_SECRET_VAR, "secret"),
            (REDIRECT_URI_VAR, "http://localhost:3000/callback"),
        ]))
        .unwrap();

        assert!(matches!(
            config.credentials(),
            Err(ConfigError::Missing(CLIENT_ID_VAR))
        ));
    }

    #[test]
    fn test_missing_secret_and_redirect() {
        let config = AppConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "client"),
            (REDIRECT_URI_VAR, "http://localhost:3000/callback"),
        ]))
        .unwrap();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::Missing(CLIENT_SECRET_VAR))
        ));

        let config = AppConfig::from_lookup(lookup(&[
            (CLIENT_ID_VAR, "client"),
            (CLIENT_SECRET_VAR, "secret"),
        ]))
        .unwrap();
        assert!(matches!(
            config.credentials(),
            Err(ConfigError::Missing(REDIRECT_URI_VAR))
        ));
    }

    #[test]
    fn test_invalid_redirect_uri() {
        let result = AppConfig::from_lookup(lookup(&[(REDIRECT_URI_VAR, "not a url")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidUrl {
                name: REDIRECT_URI_VAR,
                ..
            })
        ));
    }

    #[test]
    fn test_invalid_bind_addr() {
        let result = AppConfig::from_lookup(lookup(&[(BIND_ADDR_VAR, "localhost")]));

        assert!(matches!(result, Err(ConfigError::InvalidBindAddr(_))));
    }

    #[test]
    fn test_secret_is_redacted() {
        let config = AppConfig::from_lookup(lookup(&[(CLIENT_SECRET_VAR, "hunter2")])).unwrap();

        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
