//! Data provider: the one-time country fetch issued when the widget mounts.
//!
//! Failures never leave this module. They are logged and the widget carries
//! on with an empty list, so every search simply finds nothing.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use log::{debug, error, info};
use tokio::sync::oneshot;

use crate::model::Country;
use crate::source::CountrySource;

/// Fetch the country list once, swallowing errors.
pub async fn load_countries(source: &dyn CountrySource) -> Vec<Country> {
    match source.fetch_countries().await {
        Ok(countries) => {
            info!("Loaded {} countries", countries.len());
            countries
        }
        Err(e) => {
            error!("Failed to load countries: {}", e);
            Vec::new()
        }
    }
}

/// Spawn the fetch on the current tokio runtime.
///
/// Dropping the returned handle does not abort the fetch; its result is
/// discarded when it arrives.
pub fn spawn_load(source: Arc<dyn CountrySource>) -> CountriesLoad {
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let countries = load_countries(source.as_ref()).await;
        if tx.send(countries).is_err() {
            debug!("Country list arrived after the widget went away, discarding");
        }
    });

    CountriesLoad { rx }
}

/// Pending result of [`spawn_load`].
///
/// Resolves to the fetched list, or to an empty list if the fetch task died.
#[derive(Debug)]
pub struct CountriesLoad {
    rx: oneshot::Receiver<Vec<Country>>,
}

impl Future for CountriesLoad {
    type Output = Vec<Country>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().rx)
            .poll(cx)
            .map(|result| result.unwrap_or_default())
    }
}
