//! Reducer for photo search state.

use crate::mvi::Reducer;

use super::intent::SearchIntent;
use super::state::SearchState;

pub struct SearchReducer;

impl Reducer for SearchReducer {
    type State = SearchState;
    type Intent = SearchIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SearchIntent::FetchStarted { query, page } => {
                if page == 1 {
                    state.is_searching = true;
                } else {
                    state.is_loading_more = true;
                }
                state.search_complete = false;
                state.search_query = query;
                state.current_page = page;
                state.last_error = None;
                state
            }

            SearchIntent::FetchSucceeded { page, photos } => {
                if page == 1 {
                    state.photos = photos;
                } else {
                    state.photos.extend(photos);
                }
                settle(state, page)
            }

            SearchIntent::FetchFailed { page, message } => {
                // Photos, query and page stay as they are
                state.last_error = Some(message);
                settle(state, page)
            }

            SearchIntent::PageAdvanced => {
                state.current_page = state.current_page.saturating_add(1);
                state
            }

            SearchIntent::Reset { query } => {
                state.search_query = query;
                state.search_complete = false;
                state.photos.clear();
                state.current_page = 1;
                state
            }
        }
    }
}

/// Clear the flag the fetch for `page` raised and mark the cycle complete.
fn settle(mut state: SearchState, page: u32) -> SearchState {
    if page == 1 {
        state.is_searching = false;
    } else {
        state.is_loading_more = false;
    }
    state.search_complete = true;
    state
}
