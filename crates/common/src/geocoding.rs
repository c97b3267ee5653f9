//! Address-to-coordinates lookup.
//!
//! The directory only ever needs the single best match for a free-text
//! address. [`NominatimGeocoder`] asks a Nominatim-compatible search endpoint
//! for exactly one result and identifies itself with a fixed user agent, as
//! the public instance's usage policy requires.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Client identifier sent with every lookup.
pub const USER_AGENT: &str = "LocalServicesDirectory/1.0";
const RESULT_LIMIT: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("network error: {0}")]
    Network(String),
    #[error("geocoder responded with status {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Resolve `address` to its best match. `Ok(None)` means the lookup
    /// succeeded but found nothing.
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError>;
}

/// Nominatim reports coordinates as decimal strings; tolerate plain numbers too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Decimal {
    Text(String),
    Number(f64),
}

impl Decimal {
    fn to_f64(&self) -> Result<f64, GeocodeError> {
        match self {
            Decimal::Number(n) => Ok(*n),
            Decimal::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|e| GeocodeError::Parse(format!("invalid coordinate {s:?}: {e}"))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: Decimal,
    lon: Decimal,
}

pub struct NominatimGeocoder {
    client: reqwest::Client,
    endpoint: String,
}

impl NominatimGeocoder {
    pub fn new(endpoint: impl Into<String>) -> Result<Self, GeocodeError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| GeocodeError::Network(e.to_string()))?;
        Ok(Self { client, endpoint: endpoint.into() })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .query(&[("q", address), ("format", "json"), ("limit", RESULT_LIMIT)])
            .send()
            .await
            .map_err(|e| GeocodeError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let places = resp
            .json::<Vec<Place>>()
            .await
            .map_err(|e| GeocodeError::Parse(e.to_string()))?;
        debug!(%address, matches = places.len(), "geocode lookup finished");

        match places.first() {
            Some(p) => Ok(Some(Coordinates { lat: p.lat.to_f64()?, lon: p.lon.to_f64()? })),
            None => Ok(None),
        }
    }
}
