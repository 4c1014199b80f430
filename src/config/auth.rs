//! Authentication header building for API requests.

use super::credentials::CredentialStatus;
use super::types::ApiConfig;

/// Header name and value for authentication.
pub type AuthHeader = (String, String);

/// Build the `Authorization: Client-ID <key>` header.
///
/// Returns `None` when no access key can be resolved.
pub fn build_auth_header(api: &ApiConfig) -> Option<AuthHeader> {
    match api.resolve_credential() {
        CredentialStatus::FromConfig(key) | CredentialStatus::FromEnv { key, .. } => Some((
            "Authorization".to_string(),
            format!("Client-ID {}", key.expose()),
        )),
        CredentialStatus::Missing { .. } => None,
    }
}
