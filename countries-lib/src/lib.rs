//! Country autocomplete library
//!
//! Country records fetched once from the REST Countries API, and the
//! suggestion controller that filters them as the user types.

pub mod error;
pub mod model;
pub mod provider;
pub mod source;
pub mod suggest;

pub use model::Country;
pub use provider::{CountriesLoad, load_countries, spawn_load};
pub use source::{CountrySource, DEFAULT_ENDPOINT, RestCountriesClient, StaticSource};
pub use suggest::{NavKey, SuggestionController, SuggestionEvent, SuggestionState, SuggestionView};
