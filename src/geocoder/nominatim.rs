use crate::geocoder::core::{GeoPosition, GeocodeError, GeocoderProvider};
use anyhow::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};

const NOMINATIM_ENDPOINT: &str = "https://nominatim.openstreetmap.org";
const USER_AGENT: &str = "spatia-geocoder";

#[derive(Clone, Debug)]
pub struct NominatimProvider {
    client: Client,
    endpoint: String,
}

// Nominatim serialises coordinates as strings
#[derive(Serialize, Deserialize, Clone, Debug)]
struct NominatimPlace {
    lat: String,
    lon: String,
}

impl NominatimProvider {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(NOMINATIM_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait::async_trait]
impl GeocoderProvider for NominatimProvider {
    async fn geocode(&self, input: &str) -> Result<Option<GeoPosition>, GeocodeError> {
        let request = format!("{}/search", self.endpoint);
        let res = self
            .client
            .get(request)
            .query(&[("format", "jsonv2"), ("limit", "1"), ("q", input)])
            .send()
            .await
            .and_then(|res| res.error_for_status())
            .map_err(|err| GeocodeError::Request(err.to_string()))?;

        let places = res
            .json::<Vec<NominatimPlace>>()
            .await
            .map_err(|err| GeocodeError::Response(err.to_string()))?;

        match places.first() {
            Some(place) => Ok(Some(place.try_into()?)),
            None => Ok(None),
        }
    }
}

impl TryFrom<&NominatimPlace> for GeoPosition {
    type Error = GeocodeError;

    fn try_from(value: &NominatimPlace) -> Result<Self, Self::Error> {
        let latitude = value
            .lat
            .parse()
            .map_err(|_| GeocodeError::Response(format!("non-numeric latitude {:?}", value.lat)))?;
        let longitude = value
            .lon
            .parse()
            .map_err(|_| GeocodeError::Response(format!("non-numeric longitude {:?}", value.lon)))?;
        Ok(Self {
            latitude,
            longitude,
        })
    }
}
