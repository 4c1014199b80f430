//! Observable search state.

use serde::Serialize;

use crate::api::Photo;
use crate::mvi::StoreState;

/// Everything a photo grid needs to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchState {
    /// Fetched photos in arrival order.
    pub photos: Vec<Photo>,
    /// A page-1 fetch is outstanding.
    pub is_searching: bool,
    /// A page > 1 fetch is outstanding.
    pub is_loading_more: bool,
    /// The most recent fetch has settled, successfully or not.
    pub search_complete: bool,
    /// Last query used. Empty means random mode.
    pub search_query: String,
    /// Last page requested.
    pub current_page: u32,
    /// Failure of the most recent settled fetch.
    pub last_error: Option<String>,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            photos: Vec::new(),
            is_searching: false,
            is_loading_more: false,
            search_complete: false,
            search_query: String::new(),
            current_page: 1,
            last_error: None,
        }
    }
}

impl StoreState for SearchState {}

impl SearchState {
    /// Whether any fetch is in flight.
    pub fn is_busy(&self) -> bool {
        self.is_searching || self.is_loading_more
    }

    /// Whether `load_more_photos` would issue a request.
    pub fn can_load_more(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Whether the store is showing random photos.
    pub fn is_random_mode(&self) -> bool {
        self.search_query.is_empty()
    }
}
