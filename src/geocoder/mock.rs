use crate::geocoder::core::{GeoPosition, GeocodeError, GeocoderProvider};
use std::collections::HashMap;

/// Scripted provider for tests: known addresses resolve, listed addresses
/// fail, everything else is not found.
#[derive(Clone, Debug, Default)]
pub struct MockGeocoderProvider {
    responses: HashMap<String, GeoPosition>,
    failures: Vec<String>,
}

impl MockGeocoderProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(mut self, input: &str, latitude: f64, longitude: f64) -> Self {
        self.responses.insert(
            input.to_string(),
            GeoPosition {
                latitude,
                longitude,
            },
        );
        self
    }

    pub fn failing_on(mut self, input: &str) -> Self {
        self.failures.push(input.to_string());
        self
    }
}

#[async_trait::async_trait]
impl GeocoderProvider for MockGeocoderProvider {
    async fn geocode(&self, input: &str) -> Result<Option<GeoPosition>, GeocodeError> {
        if self.failures.iter().any(|f| f == input) {
            return Err(GeocodeError::Request(format!(
                "scripted failure for {input}"
            )));
        }
        Ok(self.responses.get(input).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_geocoder() {
        let geocoder = MockGeocoderProvider::new()
            .with_position("Tokyo", 35.6762, 139.6503)
            .failing_on("Atlantis");

        let position = geocoder.geocode("Tokyo").await.unwrap().unwrap();
        assert_eq!(position.latitude, 35.6762);
        assert_eq!(position.longitude, 139.6503);

        assert!(geocoder.geocode("Unknown Location").await.unwrap().is_none());

        let err = geocoder.geocode("Atlantis").await.unwrap_err();
        assert_eq!(err.kind(), "request_error");
    }
}
