pub mod envelope;
pub mod routes;
pub mod state;

use axum::Router;

pub use state::{AppState, SheetRanges};

pub fn module_ready() -> bool {
    true
}

pub fn app(state: AppState) -> Router {
    routes::router(state)
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, sync::Arc};

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
        Router,
    };
    use ledger::{Cell, RawRow};
    use serde_json::{json, Value};
    use sheets::{InMemorySheetClient, SheetsError};
    use tower::ServiceExt;

    use crate::{app, AppState, SheetRanges};

    fn ledger_row(ticker: &str, price: &str, daily: &str, total: &str, net: &str) -> RawRow {
        ["2026-03-02", "", "", "", "", "", ticker, price, daily, total, net]
            .into_iter()
            .map(Cell::from)
            .collect()
    }

    fn config_row(key: &str, value: &str) -> RawRow {
        vec![Cell::from(key), Cell::from(value)]
    }

    fn app_with(client: InMemorySheetClient) -> Router {
        app(AppState::new(Arc::new(client), SheetRanges::default()))
    }

    fn seeded_app() -> Router {
        let client = InMemorySheetClient::new()
            .with_range(
                "DIARIO_RAW!A2:K",
                vec![
                    ledger_row("NVDA", "880", "-2", "15", "1000"),
                    ledger_row("TSLA", "$250.00", "-4", "-60.5", "$2,500.00"),
                    ledger_row("", "1", "1", "1", "1"),
                    ledger_row("NVDA", "900", "5", "20", "1050"),
                ],
            )
            .with_range(
                "CONFIG!A2:B4",
                vec![
                    config_row("A", "1"),
                    config_row("B", "2"),
                    config_row("A", "3"),
                ],
            );
        app_with(client)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        assert_eq!(content_type.as_deref(), Some("application/json"));
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn assets_endpoint_returns_latest_snapshot_per_ticker() {
        let (status, body) = get_json(seeded_app(), "/api/assets").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], json!(true));

        let assets: HashMap<String, Value> = body["assets"]
            .as_array()
            .unwrap()
            .iter()
            .map(|asset| (asset["ticker"].as_str().unwrap().to_string(), asset.clone()))
            .collect();
        assert_eq!(assets.len(), 2);

        let nvda = &assets["NVDA"];
        assert_eq!(nvda["precio"].as_f64(), Some(900.0));
        assert_eq!(nvda["plDiario"].as_f64(), Some(5.0));
        assert_eq!(nvda["light"], json!("green"));

        let tsla = &assets["TSLA"];
        assert_eq!(tsla["valorNeto"].as_f64(), Some(2500.0));
        assert_eq!(tsla["light"], json!("red"));
        assert_eq!(
            tsla["phrase"],
            json!("Vas perdiendo 60.50 USD total; hoy resta -4.00.")
        );
    }

    #[tokio::test]
    async fn netlify_assets_path_serves_same_payload() {
        let (status, body) = get_json(seeded_app(), "/.netlify/functions/assets").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["assets"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn config_endpoint_returns_flat_map_with_last_write_winning() {
        let (status, body) = get_json(seeded_app(), "/api/config").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "A": "3", "B": "2" }));
    }

    #[tokio::test]
    async fn netlify_latest_path_serves_config() {
        let (status, body) = get_json(seeded_app(), "/.netlify/functions/latest").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["B"], json!("2"));
    }

    #[tokio::test]
    async fn empty_sheets_yield_empty_payloads() {
        let client = InMemorySheetClient::new()
            .with_range("DIARIO_RAW!A2:K", Vec::new())
            .with_range("CONFIG!A2:B4", Vec::new());

        let (_, assets) = get_json(app_with(client.clone()), "/api/assets").await;
        let (_, config) = get_json(app_with(client), "/api/config").await;

        assert_eq!(assets, json!({ "ok": true, "assets": [] }));
        assert_eq!(config, json!({}));
    }

    #[tokio::test]
    async fn assets_fetch_failure_returns_500_envelope() {
        let failing = InMemorySheetClient::failing(SheetsError::Transport(
            "connection reset by peer".to_string(),
        ));

        let (status, body) = get_json(app_with(failing), "/api/assets").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["ok"], json!(false));
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("connection reset by peer"));
        assert!(body.get("assets").is_none());
    }

    #[tokio::test]
    async fn config_fetch_failure_returns_500_error_only() {
        let failing = InMemorySheetClient::failing(SheetsError::MissingCredentials);

        let (status, body) = get_json(app_with(failing), "/api/config").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body,
            json!({ "error": "GOOGLE_SERVICE_ACCOUNT_JSON is not set" })
        );
    }

    #[tokio::test]
    async fn custom_ranges_are_used_for_reads() {
        let client = InMemorySheetClient::new()
            .with_range("CONFIG_V2!A2:B10", vec![config_row("THEME", "dark")]);
        let ranges = SheetRanges {
            assets: "DIARIO_V2!A2:K".to_string(),
            config: "CONFIG_V2!A2:B10".to_string(),
        };
        let app = app(AppState::new(Arc::new(client), ranges));

        let (status, body) = get_json(app, "/api/config").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "THEME": "dark" }));
    }
}
