//! Player search - autocomplete and input validation
//!
//! Debounced search-as-you-type against the stats backend, client-side
//! username validation and the suggestion dropdown lifecycle. Nothing here
//! depends on the UI; the app feeds it input events and renders its state.

mod controller;
mod lookup;
mod state;
mod timer;
mod username;

pub use controller::{SearchController, SearchEvent, Selection};
pub use lookup::{LOOKUP_FAILED_MESSAGE, LookupError, PlayerLookup};
pub use state::QueryState;
pub use timer::CancelableTimer;
pub use username::{
    MAX_USERNAME_LEN, MIN_USERNAME_LEN, Username, ValidationError, is_valid_username,
};

/// Shortest input that is sent to the backend
pub const MIN_QUERY_LEN: usize = 3;
