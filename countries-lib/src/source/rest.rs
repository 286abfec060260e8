//! REST Countries client

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use url::Url;

use super::CountrySource;
use crate::error::{ApiError, Error};
use crate::model::Country;

/// English-speaking countries.
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/lang/eng";

/// Client for the REST Countries API.
///
/// Cheap to clone (uses `Arc` internally). Issues a single GET per
/// [`fetch`](Self::fetch); there is no retry and no pagination.
///
/// # Example
///
/// ```ignore
/// let client = RestCountriesClient::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
///
/// let countries = client.fetch().await?;
/// ```
#[derive(Clone)]
pub struct RestCountriesClient {
    inner: Arc<RestCountriesClientInner>,
}

struct RestCountriesClientInner {
    endpoint: Url,
    http_client: Client,
    timeout: Option<Duration>,
}

impl RestCountriesClient {
    /// Creates a new builder with the default endpoint.
    pub fn builder() -> RestCountriesClientBuilder {
        RestCountriesClientBuilder::new()
    }

    /// Returns the endpoint this client fetches from.
    pub fn endpoint(&self) -> &Url {
        &self.inner.endpoint
    }

    /// Fetches and parses the country list.
    pub async fn fetch(&self) -> Result<Vec<Country>, Error> {
        let mut request = self.inner.http_client.get(self.inner.endpoint.clone());

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        debug!("GET {}", self.inner.endpoint);
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.transport_error(e))?;

        if !status.is_success() {
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Err(ApiError::http(status.as_u16(), message).into());
        }

        match serde_json::from_str::<Vec<Country>>(&body) {
            Ok(countries) => {
                debug!("Parsed {} countries", countries.len());
                Ok(countries)
            }
            Err(e) => Err(ApiError::parse_with_body(e.to_string(), body).into()),
        }
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        match self.inner.timeout {
            Some(timeout) if err.is_timeout() => ApiError::Timeout(timeout),
            _ => ApiError::Network(err),
        }
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn fetch_countries(&self) -> Result<Vec<Country>, Error> {
        self.fetch().await
    }
}

impl std::fmt::Debug for RestCountriesClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RestCountriesClient")
            .field("endpoint", &self.inner.endpoint.as_str())
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

/// Builder for constructing a [`RestCountriesClient`].
pub struct RestCountriesClientBuilder {
    endpoint: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl RestCountriesClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Overrides the endpoint URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Sets the whole-request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connect timeout. Ignored when a custom HTTP client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Uses a preconfigured HTTP client.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Builds the client, validating the endpoint.
    pub fn build(self) -> Result<RestCountriesClient, Error> {
        let endpoint = Url::parse(&self.endpoint)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.endpoint, e)))?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ApiError::InvalidUrl(format!(
                "{}: unsupported scheme '{}'",
                self.endpoint,
                endpoint.scheme()
            ))
            .into());
        }

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        Ok(RestCountriesClient {
            inner: Arc::new(RestCountriesClientInner {
                endpoint,
                http_client,
                timeout: self.timeout,
            }),
        })
    }
}

impl Default for RestCountriesClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        let client = RestCountriesClient::builder().build().unwrap();
        assert_eq!(client.endpoint().as_str(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = RestCountriesClient::builder()
            .endpoint("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err.as_api(), Some(ApiError::InvalidUrl(_))));

        let err = RestCountriesClient::builder()
            .endpoint("ftp://example.com/countries")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }
}
