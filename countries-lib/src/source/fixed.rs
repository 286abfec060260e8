//! In-memory country source.

use async_trait::async_trait;

use super::CountrySource;
use crate::error::Error;
use crate::model::Country;

/// Source that always yields the same list.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    countries: Vec<Country>,
}

impl StaticSource {
    /// Create a source serving `countries` in the given order.
    pub fn new(countries: impl IntoIterator<Item = Country>) -> Self {
        Self {
            countries: countries.into_iter().collect(),
        }
    }

    /// Create a source from bare names, with no flag data.
    pub fn from_names<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self::new(names.into_iter().map(|name| Country::new(name, "")))
    }
}

#[async_trait]
impl CountrySource for StaticSource {
    async fn fetch_countries(&self) -> Result<Vec<Country>, Error> {
        Ok(self.countries.clone())
    }
}
