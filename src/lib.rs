//! Paginated Unsplash photo search state.
//!
//! [`store::PhotoSearchStore`] fetches search or random results, pages
//! through them and publishes loading flags and the accumulated photo list
//! to whatever front end subscribes.

pub mod api;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod store;

pub use api::{FetchError, Photo, UnsplashClient};
pub use config::{Config, ConfigError};
pub use store::{PhotoSearchStore, SearchState};
