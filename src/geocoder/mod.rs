pub mod core;
#[cfg(test)]
pub(crate) mod mock;
pub mod nominatim;

pub use self::core::{GeoPosition, GeocodeError, GeocoderProvider};
