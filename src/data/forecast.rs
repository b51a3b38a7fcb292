//! Forecast API client
//!
//! This module provides functionality to fetch city forecasts from the weather
//! API and parse them into our forecast data structures.

use std::time::Duration;

use futures::future::BoxFuture;
use reqwest::Client;
use thiserror::Error;

use super::{ForecastResponse, Location};

/// Base URL for the forecast API
pub const API_WEATHER_URL: &str = "https://zhu-cwaweather.zeabur.app/api/weather";

/// Errors that can occur when fetching or interpreting forecast data
#[derive(Debug, Error)]
pub enum ForecastError {
    /// HTTP request failed or returned a non-success status
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The request did not finish in time
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Failed to parse JSON response
    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The API answered with `success: false`
    #[error("API reported a failure")]
    ApiFailure,

    /// Missing expected field in response
    #[error("Missing expected field in response: {0}")]
    MissingField(String),

    /// The response contained no forecast periods
    #[error("Forecast list is empty")]
    EmptyForecast,

    /// A numeric field had no numeric prefix
    #[error("Invalid number in field {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

/// Anything that can produce a forecast response for a location
///
/// The returned future must not borrow the source so it can be moved into a
/// spawned task.
pub trait ForecastSource: Send + Sync {
    fn fetch(&self, location: Location) -> BoxFuture<'static, Result<ForecastResponse, ForecastError>>;
}

/// Client for fetching forecasts from the weather API
#[derive(Debug, Clone)]
pub struct ForecastClient {
    client: Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ForecastClient {
    /// Create a new ForecastClient with default settings
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: API_WEATHER_URL.to_string(),
        }
    }

    /// Use a different API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// URL of the forecast endpoint for a location
    pub fn url_for(&self, location: Location) -> String {
        format!("{}/{}", self.base_url, location.id())
    }

    /// Fetch the forecast for a location
    ///
    /// # Arguments
    /// * `location` - The city to fetch
    ///
    /// # Returns
    /// * `Ok(ForecastResponse)` - The parsed response, which may still report failure
    /// * `Err(ForecastError)` - If the request, the status or parsing fails
    pub async fn fetch_forecast(&self, location: Location) -> Result<ForecastResponse, ForecastError> {
        let url = self.url_for(location);
        tracing::debug!(%url, "requesting forecast");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;

        ForecastResponse::from_json(&text)
    }
}

impl ForecastSource for ForecastClient {
    fn fetch(&self, location: Location) -> BoxFuture<'static, Result<ForecastResponse, ForecastError>> {
        let client = self.clone();
        Box::pin(async move { client.fetch_forecast(location).await })
    }
}
