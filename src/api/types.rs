//! Response DTOs mirroring the Unsplash JSON shape.

use serde::{Deserialize, Serialize};

/// One photo result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub id: String,
    pub urls: PhotoUrls,
    /// `null` for a fair share of photos on the live API.
    #[serde(default)]
    pub alt_description: Option<String>,
    pub user: PhotoUser,
}

impl Photo {
    /// Alt text, or an empty string when the API sent none.
    pub fn alt_text(&self) -> &str {
        self.alt_description.as_deref().unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUrls {
    pub regular: String,
    pub thumb: String,
    pub full: String,
}

/// The uploader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoUser {
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
}

/// Body of `GET /search/photos`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    pub results: Vec<Photo>,
}
