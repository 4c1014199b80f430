use std::time::Duration;

use reqwest::{Client, Url};

use crate::api::error::FetchError;
use crate::api::types::{Photo, SearchResponse};
use crate::config::{build_auth_header, ApiConfig, Config};

/// Thin client over the two Unsplash photo endpoints.
#[derive(Clone)]
pub struct UnsplashClient {
    client: Client,
    api: ApiConfig,
}

impl UnsplashClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder()
            .connect_timeout(Duration::from_secs(config.http.connect_timeout_seconds.into()));

        if let Some(secs) = config.http.request_timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs.into()));
        }

        Ok(Self {
            client: builder.build()?,
            api: config.api.clone(),
        })
    }

    pub fn api(&self) -> &ApiConfig {
        &self.api
    }

    /// URL for one page of results.
    ///
    /// An empty query selects the random endpoint, which ignores `page`.
    pub fn request_url(&self, query: &str, page: u32) -> Result<Url, FetchError> {
        let base = self.api.base_url.trim_end_matches('/');

        let url = if query.is_empty() {
            Url::parse_with_params(
                &format!("{}/photos/random", base),
                &[("count", self.api.random_count.to_string())],
            )
        } else {
            Url::parse_with_params(
                &format!("{}/search/photos", base),
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("per_page", self.api.per_page.to_string()),
                ],
            )
        };

        url.map_err(|e| FetchError::InvalidUrl(e.to_string()))
    }

    /// Fetch one page of photos.
    ///
    /// Search responses are unwrapped from their `results` field; the
    /// random endpoint returns the list directly.
    pub async fn fetch_page(&self, query: &str, page: u32) -> Result<Vec<Photo>, FetchError> {
        let url = self.request_url(query, page)?;

        // Resolved per request so a key exported after startup is honoured
        let (name, value) =
            build_auth_header(&self.api).ok_or_else(|| FetchError::MissingCredential {
                env_var: self.api.access_key_env.clone(),
            })?;

        tracing::debug!(url = %url, "Requesting photos");

        let response = self
            .client
            .get(url)
            .header(name.as_str(), value)
            .header("Accept-Version", "v1")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;

        if query.is_empty() {
            Ok(serde_json::from_slice::<Vec<Photo>>(&body)?)
        } else {
            Ok(serde_json::from_slice::<SearchResponse>(&body)?.results)
        }
    }
}
