use std::sync::Arc;

use api::{AppState, SheetRanges};
use axum::{routing::get, Router};
use sheets::GoogleSheetsClient;

use crate::config::Config;

pub fn build_app(config: &Config) -> Router {
    debug_assert!(ledger::module_ready());
    debug_assert!(sheets::module_ready());
    debug_assert!(api::module_ready());

    let client = GoogleSheetsClient::new(
        config.sheet_id.clone(),
        config.service_account_json.clone(),
    )
    .with_api_base(config.sheets_api_base.as_str());
    let ranges = SheetRanges {
        assets: config.assets_range.clone(),
        config: config.config_range.clone(),
    };

    api::app(AppState::new(Arc::new(client), ranges)).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}
