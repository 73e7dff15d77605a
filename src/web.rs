use crate::batch;
use crate::config::Config;
use crate::geocoder::nominatim::NominatimProvider;
use crate::geocoder::GeocoderProvider;
use crate::results::{self, GeocodeResult};
use anyhow::Result;
use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Deserialize, Clone, Debug)]
pub struct GeocodeRequest {
    pub addresses: Vec<String>,
}

pub struct AppState<T> {
    pub provider: T,
    pub config: Config,
}

pub async fn start_server(config: Config) -> Result<()> {
    let provider = NominatimProvider::new()?;
    let app = router(Arc::new(AppState { provider, config }));

    // Loopback only; the port comes from the environment at startup
    let address = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(&address).await?;
    log::info!("Listening on http://{address}");
    axum::serve(listener, app).await?;
    Ok(())
}

fn router<T>(state: Arc<AppState<T>>) -> Router
where
    T: GeocoderProvider + Send + Sync + 'static,
{
    Router::new()
        .route("/geocode", post(geocode))
        .with_state(state)
}

async fn geocode<T>(
    State(state): State<Arc<AppState<T>>>,
    Json(payload): Json<GeocodeRequest>,
) -> Json<Vec<GeocodeResult>>
where
    T: GeocoderProvider + Send + Sync + 'static,
{
    let resolved = batch::resolve_all(&state.provider, &payload.addresses).await;
    Json(results::render_all(&resolved, state.config.debug))
}
