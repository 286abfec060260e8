//! Data model

mod country;

pub use country::*;
