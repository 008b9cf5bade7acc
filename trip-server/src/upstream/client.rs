//! Upstream trip API HTTP client.
//!
//! Handles authentication, concurrency limiting, status mapping and
//! decoding of the offer list.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;

use crate::domain::{AirportCode, Trip};
use crate::error::TripError;
use crate::gateway::TripSource;

use super::error::UpstreamError;

/// Default maximum concurrent requests.
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest response body excerpt kept in decode errors.
const BODY_EXCERPT_CHARS: usize = 500;

/// Configuration for the trip API client.
#[derive(Debug, Clone)]
pub struct TripApiConfig {
    /// Base URL; offers are served from `{base_url}/trips`
    pub base_url: String,
    /// API key sent in the `x-api-key` header
    pub api_key: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl TripApiConfig {
    /// Create a new config for the given base URL and API key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Trip API client.
///
/// Uses a semaphore to limit concurrent requests and avoid rate limiting.
#[derive(Debug, Clone)]
pub struct HttpTripSource {
    http: reqwest::Client,
    trips_url: String,
    semaphore: Arc<Semaphore>,
}

impl HttpTripSource {
    /// Create a new client with the given configuration.
    pub fn new(config: TripApiConfig) -> Result<Self, UpstreamError> {
        let mut headers = HeaderMap::new();

        let api_key =
            HeaderValue::from_str(&config.api_key).map_err(|_| UpstreamError::ApiError {
                status: 0,
                message: "Invalid API key format".to_string(),
            })?;
        headers.insert("x-api-key", api_key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            trips_url: trips_url(&config.base_url),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Get the offers for a route.
    pub async fn get_trips(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Vec<Trip>, UpstreamError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| UpstreamError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let response = self
            .http
            .get(&self.trips_url)
            .query(&[
                ("origin", origin.as_str()),
                ("destination", destination.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(UpstreamError::RouteNotFound {
                origin: origin.to_string(),
                destination: destination.to_string(),
            });
        }

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(UpstreamError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(UpstreamError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(UpstreamError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        decode_trips(&body)
    }
}

#[async_trait]
impl TripSource for HttpTripSource {
    async fn fetch_trips(
        &self,
        origin: AirportCode,
        destination: AirportCode,
    ) -> Result<Vec<Trip>, TripError> {
        self.get_trips(origin, destination).await.map_err(|e| {
            tracing::error!(%origin, %destination, error = %e, "error fetching trips");
            TripError::from(e)
        })
    }
}

/// Join the base URL and the trips path without doubling the slash.
fn trips_url(base_url: &str) -> String {
    format!("{}/trips", base_url.trim_end_matches('/'))
}

/// Decode an offer list response body.
fn decode_trips(body: &str) -> Result<Vec<Trip>, UpstreamError> {
    serde_json::from_str(body).map_err(|e| UpstreamError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    })
}
