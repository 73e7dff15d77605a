use crate::batch::{Resolution, ResolvedAddress};
use serde::Serialize;

/// Wire shape of one resolved address. `lat`/`lon` are always emitted,
/// null when unresolved; `status` and `error` only exist in the verbose
/// (debug) rendering and are omitted entirely otherwise.
#[derive(Serialize, Clone, Debug)]
pub struct GeocodeResult {
    pub address: String,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl GeocodeResult {
    pub fn terse(resolved: &ResolvedAddress) -> Self {
        let (lat, lon) = coordinates(&resolved.resolution);
        Self {
            address: resolved.address.clone(),
            lat,
            lon,
            status: None,
            error: None,
        }
    }

    pub fn verbose(resolved: &ResolvedAddress) -> Self {
        let (lat, lon) = coordinates(&resolved.resolution);
        let (status, error) = match &resolved.resolution {
            Resolution::Found(_) => ("ok", None),
            Resolution::NotFound => ("not_found", None),
            Resolution::Failed(err) => ("error", Some(err.describe())),
        };
        Self {
            address: resolved.address.clone(),
            lat,
            lon,
            status: Some(status),
            error,
        }
    }
}

fn coordinates(resolution: &Resolution) -> (Option<f64>, Option<f64>) {
    match resolution {
        Resolution::Found(position) => (Some(position.latitude), Some(position.longitude)),
        _ => (None, None),
    }
}

/// The debug flag is applied here, once per batch, so the resolver never
/// has to know about presentation.
pub fn render_all(resolved: &[ResolvedAddress], debug: bool) -> Vec<GeocodeResult> {
    resolved
        .iter()
        .map(|r| {
            if debug {
                GeocodeResult::verbose(r)
            } else {
                GeocodeResult::terse(r)
            }
        })
        .collect()
}
