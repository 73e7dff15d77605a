use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

/// Failure of a single provider lookup. The kind is an explicit label so
/// diagnostic output stays stable no matter which provider produced it.
#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("{0}")]
    Request(String),
    #[error("{0}")]
    Response(String),
}

impl GeocodeError {
    pub fn kind(&self) -> &'static str {
        match self {
            GeocodeError::Request(_) => "request_error",
            GeocodeError::Response(_) => "response_error",
        }
    }

    pub fn describe(&self) -> String {
        format!("{}: {}", self.kind(), self)
    }
}

/// A lookup service that turns a free-text address into a position.
/// `Ok(None)` means the provider answered but found nothing, which is
/// not an error.
#[async_trait::async_trait]
pub trait GeocoderProvider {
    async fn geocode(&self, input: &str) -> Result<Option<GeoPosition>, GeocodeError>;
}
