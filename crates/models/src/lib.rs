//! Store: connection handling, schema bootstrap and row-level CRUD over the
//! `services` and `requests` tables.

pub mod errors;
pub mod db;
pub mod services;
pub mod requests;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
