//! Model-View-Intent primitives for the store.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ subscribers
//!    ↑                                │
//!    └──── fetch results ─────────────┘
//! ```
//!
//! Every state change is expressed as an intent and applied by a pure
//! reducer, so transitions can be tested without a network.

/// Marker trait for state snapshots handed to observers.
///
/// States are cloned out to subscribers and compared to detect changes.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Marker trait for intents: caller actions and fetch outcomes.
pub trait StoreIntent: Send + 'static {}

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    type State: StoreState;
    type Intent: StoreIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
