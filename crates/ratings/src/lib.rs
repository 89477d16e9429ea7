//! IMDb rating lookups against the OMDb HTTP API.
//!
//! This crate provides:
//! - The `RatingSource` trait the session fetches ratings through
//! - `OmdbClient`, an HTTP implementation backed by reqwest
//!
//! A lookup never fails from the caller's point of view: any transport
//! error, non-200 status or unusable body yields `None`. Each call makes
//! exactly one request.

use std::future::Future;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";
pub const DEFAULT_API_KEY: &str = "50569543";

/// Errors that can occur when talking to the rating service
#[derive(Error, Debug)]
pub enum RatingError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Anything that can look up a rating for a movie title.
pub trait RatingSource {
    /// Rating for `title`, or `None` when it is unavailable for any reason.
    fn fetch(&self, title: &str) -> impl Future<Output = Option<f64>>;
}

/// Connection settings for [`OmdbClient`].
#[derive(Debug, Clone)]
pub struct OmdbConfig {
    pub base_url: String,
    pub api_key: String,
    /// Sent as `i`. OMDb prefers it over the title, so leave unset for title lookups
    pub imdb_id: Option<String>,
    /// Per-request timeout; `None` keeps reqwest's default
    pub timeout: Option<Duration>,
}

impl Default for OmdbConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            imdb_id: None,
            timeout: None,
        }
    }
}

/// Relevant slice of an OMDb response body.
#[derive(Debug, Deserialize)]
struct OmdbResponse {
    #[serde(rename = "imdbRating")]
    imdb_rating: Option<String>,
}

impl OmdbResponse {
    /// OMDb reports ratings as strings and uses "N/A" for unrated titles.
    fn rating(&self) -> Option<f64> {
        self.imdb_rating.as_deref()?.trim().parse().ok()
    }
}

/// Client for the OMDb rating service.
pub struct OmdbClient {
    http_client: reqwest::Client,
    config: OmdbConfig,
}

impl OmdbClient {
    /// Build a client for the OMDb service.
    ///
    /// No request is made here; the first network call happens on
    /// [`RatingSource::fetch`].
    ///
    /// # Arguments
    /// * `config` - Endpoint, API key, optional IMDb id and timeout
    ///
    /// # Returns
    /// A ready client, or `RatingError::Http` if reqwest cannot build one
    /// (for example when the TLS backend fails to initialize)
    pub fn new(config: OmdbConfig) -> Result<Self, RatingError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
            config,
        })
    }

    async fn request(&self, title: &str) -> Result<Option<f64>, RatingError> {
        let mut params = vec![("t", title)];
        if let Some(imdb_id) = &self.config.imdb_id {
            params.push(("i", imdb_id.as_str()));
        }
        params.push(("apikey", self.config.api_key.as_str()));

        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&params)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::OK {
            debug!("Rating service answered {} for {:?}", response.status(), title);
            return Ok(None);
        }

        let body: OmdbResponse = response.json().await?;
        let rating = body.rating();
        if rating.is_none() {
            debug!("No usable imdbRating for {:?}", title);
        }
        Ok(rating)
    }
}

impl RatingSource for OmdbClient {
    async fn fetch(&self, title: &str) -> Option<f64> {
        match self.request(title).await {
            Ok(rating) => rating,
            Err(e) => {
                warn!("Rating lookup for {:?} failed: {}", title, e);
                None
            }
        }
    }
}
