use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

/// Settings for the Unsplash API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.unsplash.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Environment variable holding the access key.
    #[serde(default = "default_access_key_env")]
    pub access_key_env: String,
    /// Direct access key. Takes precedence over `access_key_env`.
    #[serde(default)]
    pub access_key: Option<String>,
    /// Page size for search requests.
    #[serde(default = "default_page_size")]
    pub per_page: u32,
    /// Number of photos requested in random mode.
    #[serde(default = "default_page_size")]
    pub random_count: u32,
    /// Query used when the caller does not supply one.
    #[serde(default = "default_query")]
    pub default_query: String,
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connection timeout in seconds (default: 10).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Total request timeout in seconds. Unbounded when unset.
    #[serde(default)]
    pub request_timeout_seconds: Option<u32>,
}

/// Upper bound Unsplash accepts for `per_page` and `count`.
pub const MAX_PAGE_SIZE: u32 = 30;

fn default_base_url() -> String {
    "https://api.unsplash.com".to_string()
}

fn default_access_key_env() -> String {
    "UNSPLASH_ACCESS_KEY".to_string()
}

fn default_page_size() -> u32 {
    15
}

fn default_query() -> String {
    "african".to_string()
}

fn default_connect_timeout() -> u32 {
    10
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            access_key_env: default_access_key_env(),
            access_key: None,
            per_page: default_page_size(),
            random_count: default_page_size(),
            default_query: default_query(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_seconds: default_connect_timeout(),
            request_timeout_seconds: None,
        }
    }
}
