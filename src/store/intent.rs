//! Intents for the photo search store.

use crate::api::Photo;
use crate::mvi::StoreIntent;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchIntent {
    /// A fetch for `query`/`page` is about to be sent.
    FetchStarted { query: String, page: u32 },

    /// A fetch for `page` returned photos.
    FetchSucceeded { page: u32, photos: Vec<Photo> },

    /// A fetch for `page` failed.
    FetchFailed { page: u32, message: String },

    /// Load more was requested for a non-blank query.
    PageAdvanced,

    /// Clear results and switch to `query` before refetching.
    Reset { query: String },
}

impl StoreIntent for SearchIntent {}
