use axum::body::Bytes;
use serde::{Deserialize, Serialize};

/// Query string Spotify appends when redirecting back after consent.
#[derive(Debug, Default)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Picks `code` and `error` out of the raw query pairs. When a key is
    /// repeated the first value wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "code" if params.code.is_none() => params.code = Some(value),
                "error" if params.error.is_none() => params.error = Some(value),
                _ => {}
            }
        }
        params
    }

    /// The authorization code, if one was supplied and is non-empty.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref().filter(|code| !code.is_empty())
    }
}

/// The subset of Spotify's token payload relayed to the caller. Other fields
/// (`scope`, `token_type`) are dropped on deserialization, and any of the
/// three that Spotify leaves out is left out of the relay too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpotifyToken {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u64>,
}

/// Outcome of a token exchange that reached Spotify, decided by the
/// upstream HTTP status.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenExchange {
    Granted(SpotifyToken),
    /// Spotify's error body, byte for byte.
    Rejected(Bytes),
}
