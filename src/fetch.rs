//! Forecast fetching in the background
//!
//! Fetches run as tokio tasks and report back to the main loop over a
//! channel, so the UI keeps drawing the loading indicator meanwhile. Each
//! fetch takes at least [`MIN_LOADING`] so fast responses do not make the
//! indicator flicker.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::data::{ForecastData, ForecastError, ForecastSource, Location};
use crate::state::RequestId;

/// Shortest time the loading indicator stays visible
pub const MIN_LOADING: Duration = Duration::from_millis(1500);

/// Default upper bound for a single request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Timing configuration for fetches
#[derive(Debug, Clone, Copy)]
pub struct FetchConfig {
    /// Minimum visible loading time
    pub min_loading: Duration,
    /// Request timeout
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            min_loading: MIN_LOADING,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Message sent from a finished fetch task to the main loop
#[derive(Debug)]
pub struct FetchOutcome {
    pub request: RequestId,
    pub location: Location,
    pub result: Result<ForecastData, ForecastError>,
}

/// Fetches the forecast for a location
///
/// The request and the minimum loading delay run concurrently; this returns
/// once both are done, so it takes `max(request time, min_loading)`.
///
/// # Returns
/// * `Ok(ForecastData)` - When the API answered with `success: true`
/// * `Err(ForecastError)` - On network failure, timeout, bad JSON or an API-reported failure
pub async fn fetch_forecast(
    source: &dyn ForecastSource,
    location: Location,
    config: FetchConfig,
) -> Result<ForecastData, ForecastError> {
    let request = async {
        match tokio::time::timeout(config.timeout, source.fetch(location)).await {
            Ok(result) => result,
            Err(_) => Err(ForecastError::Timeout(config.timeout)),
        }
    };

    let (result, ()) = tokio::join!(request, tokio::time::sleep(config.min_loading));
    result?.into_data()
}

/// Spawns fetch tasks and collects their outcomes
pub struct Fetcher {
    source: Arc<dyn ForecastSource>,
    config: FetchConfig,
    sender: mpsc::Sender<FetchOutcome>,
    receiver: mpsc::Receiver<FetchOutcome>,
}

impl Fetcher {
    /// Creates a new Fetcher
    ///
    /// # Arguments
    /// * `source` - Where forecasts come from
    /// * `config` - Loading delay and timeout
    pub fn new(source: Arc<dyn ForecastSource>, config: FetchConfig) -> Self {
        let (sender, receiver) = mpsc::channel(32);
        Self {
            source,
            config,
            sender,
            receiver,
        }
    }

    /// Starts a fetch in the background
    ///
    /// Must be called from within a tokio runtime. Requests cannot be
    /// cancelled; the outcome always arrives on the channel.
    pub fn spawn(&self, request: RequestId, location: Location) {
        let source = Arc::clone(&self.source);
        let tx = self.sender.clone();
        let config = self.config;

        tracing::info!(request = request.0, location = location.id(), "fetching forecast");

        tokio::spawn(async move {
            let result = fetch_forecast(source.as_ref(), location, config).await;
            match &result {
                Ok(data) => tracing::info!(
                    request = request.0,
                    location = location.id(),
                    periods = data.forecasts.len(),
                    "forecast received"
                ),
                Err(err) => tracing::warn!(
                    request = request.0,
                    location = location.id(),
                    error = %err,
                    "forecast fetch failed"
                ),
            }

            let _ = tx
                .send(FetchOutcome {
                    request,
                    location,
                    result,
                })
                .await;
        });
    }

    /// Checks for a finished fetch without blocking
    ///
    /// # Returns
    /// * `Some(FetchOutcome)` if a fetch has finished
    /// * `None` if nothing is pending
    pub fn try_recv(&mut self) -> Option<FetchOutcome> {
        self.receiver.try_recv().ok()
    }

    /// Waits for the next finished fetch
    pub async fn recv(&mut self) -> Option<FetchOutcome> {
        self.receiver.recv().await
    }
}
