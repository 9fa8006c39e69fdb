use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ledger::AssetSnapshot;
use serde::Serialize;
use serde_json::json;

#[derive(Debug, Serialize)]
pub struct AssetsResponse {
    pub ok: bool,
    pub assets: Vec<AssetSnapshot>,
}

impl AssetsResponse {
    pub fn new(assets: Vec<AssetSnapshot>) -> Self {
        Self { ok: true, assets }
    }
}

/// `{ "ok": false, "error": ... }` with status 500.
#[derive(Debug)]
pub struct AssetsFailure(pub String);

impl IntoResponse for AssetsFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "ok": false, "error": self.0 })),
        )
            .into_response()
    }
}

/// `{ "error": ... }` with status 500; the config success body has no envelope.
#[derive(Debug)]
pub struct ConfigFailure(pub String);

impl IntoResponse for ConfigFailure {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": self.0 })),
        )
            .into_response()
    }
}
