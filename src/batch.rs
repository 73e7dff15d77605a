use crate::geocoder::{GeoPosition, GeocodeError, GeocoderProvider};

/// Terminal outcome of one address lookup.
#[derive(Debug)]
pub enum Resolution {
    Found(GeoPosition),
    NotFound,
    Failed(GeocodeError),
}

#[derive(Debug)]
pub struct ResolvedAddress {
    pub address: String,
    pub resolution: Resolution,
}

pub async fn resolve<T>(provider: &T, address: &str) -> ResolvedAddress
where
    T: GeocoderProvider + Sync,
{
    let resolution = match provider.geocode(address).await {
        Ok(Some(position)) => Resolution::Found(position),
        Ok(None) => Resolution::NotFound,
        Err(err) => {
            log::warn!("Failed to geocode '{}': {}", address, err.describe());
            Resolution::Failed(err)
        }
    };
    ResolvedAddress {
        address: address.to_string(),
        resolution,
    }
}

/// Resolves addresses one at a time, in input order. A failed lookup is
/// recorded in its slot and the batch moves on to the next address.
pub async fn resolve_all<T>(provider: &T, addresses: &[String]) -> Vec<ResolvedAddress>
where
    T: GeocoderProvider + Sync,
{
    let mut results = Vec::with_capacity(addresses.len());
    for address in addresses {
        results.push(resolve(provider, address).await);
    }
    results
}
