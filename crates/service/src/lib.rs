//! Business operations of the directory on top of the store.
//! - Validates input before any external call or write.
//! - Geocodes addresses through the `common::Geocoder` seam.
//! - Shapes the JSON views returned by the HTTP layer.

pub mod errors;
pub mod validation;
pub mod views;
pub mod directory_service;
pub mod request_service;
#[cfg(test)]
pub mod test_support;
