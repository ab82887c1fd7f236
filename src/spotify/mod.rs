//! Spotify Accounts service: authorization URL and token endpoint.

pub mod authorize;
pub mod token;

pub use authorize::authorize_url;
pub use token::exchange_code;

pub const AUTHORIZE_ENDPOINT: &str = "https://accounts.spotify.com/authorize";
pub const TOKEN_ENDPOINT: &str = "https://accounts.spotify.com/api/token";
