//! Access key resolution.
//!
//! The Unsplash access key comes either from the config file or from an
//! environment variable, resolved at request time.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Where the access key was found, if anywhere.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// Key set directly in the config file.
    FromConfig(SecureString),
    /// Key read from the named environment variable.
    FromEnv {
        var: String,
        key: SecureString,
    },
    /// No usable key.
    Missing {
        /// Environment variable that was consulted.
        var: String,
    },
}

impl CredentialStatus {
    /// The resolved key, if any.
    pub fn key(&self) -> Option<&SecureString> {
        match self {
            CredentialStatus::FromConfig(key) | CredentialStatus::FromEnv { key, .. } => Some(key),
            CredentialStatus::Missing { .. } => None,
        }
    }
}

impl ApiConfig {
    /// Resolve the access key.
    ///
    /// Called for every request and never cached, so a key exported after
    /// startup is picked up by the next fetch.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if let Some(ref key) = self.access_key {
            if !key.trim().is_empty() {
                return CredentialStatus::FromConfig(SecureString::new(key.clone()));
            }
        }

        match std::env::var(&self.access_key_env) {
            Ok(key) if !key.trim().is_empty() => CredentialStatus::FromEnv {
                var: self.access_key_env.clone(),
                key: SecureString::new(key),
            },
            _ => CredentialStatus::Missing {
                var: self.access_key_env.clone(),
            },
        }
    }
}
