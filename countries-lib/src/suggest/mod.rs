//! Suggestion controller
//!
//! Filters the country list on every keystroke, tracks which suggestion is
//! keyboard-highlighted, and remembers the last confirmed pick. All state is
//! held in [`SuggestionState`] and changed only through the transition
//! methods on [`SuggestionController`].

mod filter;
mod state;
mod view;

pub use filter::filter_countries;
pub use state::*;
pub use view::*;
