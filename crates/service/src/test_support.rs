#![cfg(test)]
use std::sync::Mutex;

use async_trait::async_trait;
use common::{Coordinates, GeocodeError, Geocoder};

use crate::views::ServiceInput;

pub fn service_input(name: &str, address: &str, description: &str) -> ServiceInput {
    ServiceInput {
        name: Some(name.into()),
        address: Some(address.into()),
        description: Some(description.into()),
    }
}

enum Reply {
    Found(Coordinates),
    Empty,
    Fail,
}

/// Geocoder with a canned reply that records every address it was asked for.
pub struct StubGeocoder {
    reply: Reply,
    seen: Mutex<Vec<String>>,
}

impl StubGeocoder {
    fn with(reply: Reply) -> Self { Self { reply, seen: Mutex::new(Vec::new()) } }
    pub fn found(lat: f64, lon: f64) -> Self { Self::with(Reply::Found(Coordinates { lat, lon })) }
    pub fn empty() -> Self { Self::with(Reply::Empty) }
    pub fn failing() -> Self { Self::with(Reply::Fail) }

    pub fn queries(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl Geocoder for StubGeocoder {
    async fn geocode(&self, address: &str) -> Result<Option<Coordinates>, GeocodeError> {
        self.seen.lock().unwrap().push(address.to_string());
        match &self.reply {
            Reply::Found(c) => Ok(Some(*c)),
            Reply::Empty => Ok(None),
            Reply::Fail => Err(GeocodeError::Status(503)),
        }
    }
}
