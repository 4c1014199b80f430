//! Unsplash HTTP client and response types.

mod client;
mod error;
mod types;

pub use client::UnsplashClient;
pub use error::FetchError;
pub use types::{Photo, PhotoUrls, PhotoUser, SearchResponse};
