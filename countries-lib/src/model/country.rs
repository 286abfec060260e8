//! Country record as returned by the REST Countries API.
//!
//! ## Wire Format
//!
//! The endpoint returns an array of large objects; only these fields are read:
//!
//! ```json
//! {
//!   "name": { "common": "Ireland" },
//!   "flags": { "svg": "https://flagcdn.com/ie.svg" },
//!   "flag": "🇮🇪"
//! }
//! ```
//!
//! `name.common` is required. `flags` and `flag` may be absent.

use serde::Deserialize;

/// A single country.
///
/// Immutable once constructed; the list it lives in is set once per session.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "CountryWire")]
pub struct Country {
    common_name: String,
    flag_image_url: String,
    flag: Option<String>,
}

impl Country {
    /// Creates a country from its common name and flag image URL.
    pub fn new(common_name: impl Into<String>, flag_image_url: impl Into<String>) -> Self {
        Self {
            common_name: common_name.into(),
            flag_image_url: flag_image_url.into(),
            flag: None,
        }
    }

    /// Sets the emoji flag.
    pub fn with_flag(mut self, flag: impl Into<String>) -> Self {
        self.flag = Some(flag.into());
        self
    }

    /// The common English name, e.g. "United Kingdom".
    pub fn common_name(&self) -> &str {
        &self.common_name
    }

    /// URL of the SVG flag image.
    pub fn flag_image_url(&self) -> &str {
        &self.flag_image_url
    }

    /// Emoji flag, when the endpoint supplied one.
    pub fn flag(&self) -> Option<&str> {
        self.flag.as_deref()
    }
}

#[derive(Deserialize)]
struct CountryWire {
    name: NameWire,
    #[serde(default)]
    flags: FlagsWire,
    #[serde(default)]
    flag: Option<String>,
}

#[derive(Deserialize)]
struct NameWire {
    common: String,
}

#[derive(Default, Deserialize)]
struct FlagsWire {
    #[serde(default)]
    svg: String,
}

impl From<CountryWire> for Country {
    fn from(wire: CountryWire) -> Self {
        Self {
            common_name: wire.name.common,
            flag_image_url: wire.flags.svg,
            flag: wire.flag.filter(|f| !f.is_empty()),
        }
    }
}
