//! Photo search store.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Observable search state
//! - `intent.rs` - Caller actions and fetch outcomes
//! - `reducer.rs` - State transitions
//! - `photo_store.rs` - Shared handle that runs fetches and applies intents

mod intent;
mod photo_store;
mod reducer;
mod state;

pub use intent::SearchIntent;
pub use photo_store::PhotoSearchStore;
pub use reducer::SearchReducer;
pub use state::SearchState;
