//! The photo search store.
//!
//! Holds the current [`SearchState`] and drives it from Unsplash
//! responses. Clones share the same state, so one store created at
//! startup can be handed to every view that needs it.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::api::{FetchError, UnsplashClient};
use crate::config::Config;
use crate::mvi::Reducer;

use super::intent::SearchIntent;
use super::reducer::SearchReducer;
use super::state::SearchState;

/// Shared handle to the search state and the client that feeds it.
///
/// Overlapping fetches are not cancelled: each one applies its result when
/// it lands, so the last page-1 response wins and concurrent load-more calls
/// may interleave their appends.
#[derive(Clone)]
pub struct PhotoSearchStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    client: UnsplashClient,
    state: RwLock<SearchState>,
    /// Publishes a snapshot after every transition.
    updates: watch::Sender<SearchState>,
}

impl PhotoSearchStore {
    pub fn new(client: UnsplashClient) -> Self {
        let (updates, _) = watch::channel(SearchState::default());
        Self {
            inner: Arc::new(StoreInner {
                client,
                state: RwLock::new(SearchState::default()),
                updates,
            }),
        }
    }

    /// Build a store with a fresh client for `config`.
    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Ok(Self::new(UnsplashClient::new(config)?))
    }

    /// Query used by [`fetch_default`](Self::fetch_default) and
    /// [`reset_to_default`](Self::reset_to_default).
    pub fn default_query(&self) -> &str {
        &self.inner.client.api().default_query
    }

    pub fn snapshot(&self) -> SearchState {
        self.inner.state.read().clone()
    }

    /// Receive a snapshot after every state change.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.inner.updates.subscribe()
    }

    /// Wait until no fetch is in flight and return the state at that point.
    ///
    /// Resolves immediately on a store that has nothing outstanding.
    pub async fn settled(&self) -> SearchState {
        let mut updates = self.subscribe();
        let state = match updates.wait_for(|state| !state.is_busy()).await {
            Ok(state) => state.clone(),
            Err(_) => self.snapshot(),
        };
        state
    }

    /// Fetch one page for `query`; an empty query fetches random photos.
    ///
    /// Page 1 replaces the current photos, later pages append. Failures are
    /// logged and recorded in `last_error`, never returned. A `page` of 0 is
    /// treated as 1.
    pub async fn fetch_photos(&self, query: &str, page: u32) {
        let page = page.max(1);
        self.dispatch(SearchIntent::FetchStarted {
            query: query.to_string(),
            page,
        });

        self.complete_fetch(query, page)
            .instrument(fetch_span(query, page))
            .await
    }

    /// Fetch page 1 of the configured default query.
    pub async fn fetch_default(&self) {
        let query = self.default_query().to_string();
        self.fetch_photos(&query, 1).await;
    }

    /// Fetch the next page of the current query.
    ///
    /// Does nothing in random mode or when the query is blank.
    pub async fn load_more_photos(&self) {
        // Check, advance and start under one lock so concurrent callers
        // each get their own page
        let started = {
            let mut state = self.inner.state.write();
            if state.can_load_more() {
                self.apply(&mut *state, SearchIntent::PageAdvanced);
                let query = state.search_query.clone();
                let page = state.current_page;
                self.apply(
                    &mut *state,
                    SearchIntent::FetchStarted {
                        query: query.clone(),
                        page,
                    },
                );
                Some((query, page))
            } else {
                None
            }
        };

        let Some((query, page)) = started else {
            tracing::debug!("No search query, skipping load more");
            return;
        };

        self.complete_fetch(&query, page)
            .instrument(fetch_span(&query, page))
            .await
    }

    /// Clear results, switch to `default_query` and start fetching page 1.
    ///
    /// The reset and the start of the fetch (`is_searching`) are applied
    /// before returning; the request itself runs on the Tokio runtime and
    /// its handle may be awaited or dropped. Must be called from within a
    /// runtime.
    pub fn reset_search(&self, default_query: &str) -> JoinHandle<()> {
        tracing::info!(query = default_query, "Search reset");
        {
            let mut state = self.inner.state.write();
            self.apply(
                &mut *state,
                SearchIntent::Reset {
                    query: default_query.to_string(),
                },
            );
            self.apply(
                &mut *state,
                SearchIntent::FetchStarted {
                    query: default_query.to_string(),
                    page: 1,
                },
            );
        }

        let store = self.clone();
        let query = default_query.to_string();
        let span = fetch_span(&query, 1);
        tokio::spawn(async move { store.complete_fetch(&query, 1).await }.instrument(span))
    }

    /// [`reset_search`](Self::reset_search) with the configured default query.
    pub fn reset_to_default(&self) -> JoinHandle<()> {
        let query = self.default_query().to_string();
        self.reset_search(&query)
    }

    /// Send the request for an already started fetch and apply its outcome.
    async fn complete_fetch(&self, query: &str, page: u32) {
        match self.inner.client.fetch_page(query, page).await {
            Ok(photos) => {
                tracing::info!(count = photos.len(), "Photos fetched");
                self.dispatch(SearchIntent::FetchSucceeded { page, photos });
            }
            Err(e) => {
                tracing::error!(
                    error = %e,
                    error_type = e.error_type(),
                    "Error fetching photos"
                );
                self.dispatch(SearchIntent::FetchFailed {
                    page,
                    message: e.to_string(),
                });
            }
        }
    }

    fn dispatch(&self, intent: SearchIntent) {
        let mut state = self.inner.state.write();
        self.apply(&mut *state, intent);
    }

    /// Reduce `intent` into `state`, which the caller holds under the write lock.
    fn apply(&self, state: &mut SearchState, intent: SearchIntent) {
        let next = SearchReducer::reduce(std::mem::take(state), intent);
        // Published under the lock so subscribers see transitions in order
        self.inner.updates.send_replace(next.clone());
        *state = next;
    }
}

fn fetch_span(query: &str, page: u32) -> tracing::Span {
    let request_id = Uuid::new_v4();
    tracing::info_span!("fetch_photos", %request_id, query, page)
}
