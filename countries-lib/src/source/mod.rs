//! Country data sources
//!
//! The fetch side effect sits behind [`CountrySource`] so the provider can be
//! driven by a fixed list instead of the network.

mod fixed;
mod rest;

pub use fixed::StaticSource;
pub use rest::*;

use async_trait::async_trait;

use crate::error::Error;
use crate::model::Country;

/// Something that can produce the country list.
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetch the full country list, in source order.
    async fn fetch_countries(&self) -> Result<Vec<Country>, Error>;
}
