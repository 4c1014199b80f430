//! Configuration loading and credential handling.

mod auth;
mod credentials;
mod loader;
mod types;

pub use auth::{build_auth_header, AuthHeader};
pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, HttpConfig, MAX_PAGE_SIZE};
