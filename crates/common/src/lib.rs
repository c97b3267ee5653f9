//! Shared building blocks: logging bootstrap, runtime checks, the geocoding
//! collaborator and small wire types.

pub mod types;
pub mod utils;
pub mod env;
pub mod geocoding;

pub use geocoding::{Coordinates, GeocodeError, Geocoder, NominatimGeocoder};
