mod home_handler;
pub mod oauth;

pub use home_handler::home_handler;
