use axum::{extract::State, routing::get, Json, Router};
use ledger::{aggregate_assets, reduce_config_rows, ConfigMap};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, error};

use crate::{
    envelope::{AssetsFailure, AssetsResponse, ConfigFailure},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/assets", get(list_assets))
        .route("/api/config", get(read_config))
        .route("/.netlify/functions/assets", get(list_assets))
        .route("/.netlify/functions/latest", get(read_config))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn list_assets(State(state): State<AppState>) -> Result<Json<AssetsResponse>, AssetsFailure> {
    let range = state.ranges().assets.as_str();
    let rows = state.sheets().read_range(range).await.map_err(|err| {
        error!(range, error = %err, "asset range fetch failed");
        AssetsFailure(err.to_string())
    })?;

    let assets = aggregate_assets(&rows);
    debug!(rows = rows.len(), assets = assets.len(), "aggregated asset snapshots");
    Ok(Json(AssetsResponse::new(assets)))
}

async fn read_config(State(state): State<AppState>) -> Result<Json<ConfigMap>, ConfigFailure> {
    let range = state.ranges().config.as_str();
    let rows = state.sheets().read_range(range).await.map_err(|err| {
        error!(range, error = %err, "config range fetch failed");
        ConfigFailure(err.to_string())
    })?;

    let config = reduce_config_rows(&rows);
    debug!(keys = config.len(), "read dashboard config");
    Ok(Json(config))
}
