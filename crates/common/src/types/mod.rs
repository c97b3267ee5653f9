use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Uniform error body returned by every endpoint.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}
