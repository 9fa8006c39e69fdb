use std::{
    fmt,
    time::{SystemTime, UNIX_EPOCH},
};

use async_trait::async_trait;
use ledger::RawRow;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use crate::{
    client::{SpreadsheetClient, READONLY_SCOPE},
    credentials::ServiceAccountKey,
    error::SheetsError,
};

pub const DEFAULT_API_BASE: &str = "https://sheets.googleapis.com";
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Sheets v4 values reader authenticated as a service account.
///
/// Credentials and the sheet id are checked on every call rather than at
/// construction, so a misconfigured deployment still serves a readable error
/// per request.
#[derive(Clone)]
pub struct GoogleSheetsClient {
    http: Client,
    api_base: String,
    sheet_id: Option<String>,
    credentials_json: Option<String>,
}

impl fmt::Debug for GoogleSheetsClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleSheetsClient")
            .field("api_base", &self.api_base)
            .field("sheet_id", &self.sheet_id)
            .field("has_credentials", &self.credentials_json.is_some())
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ValueRange {
    #[serde(default)]
    values: Vec<RawRow>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ErrorBody {
    Api { error: ApiErrorDetail },
    OAuth {
        error: String,
        error_description: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl GoogleSheetsClient {
    pub fn new(sheet_id: Option<String>, credentials_json: Option<String>) -> Self {
        Self {
            http: Client::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            sheet_id,
            credentials_json,
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn values_url(&self, sheet_id: &str, range: &str) -> String {
        format!(
            "{}/v4/spreadsheets/{}/values/{}",
            self.api_base,
            urlencoding::encode(sheet_id),
            urlencoding::encode(range)
        )
    }

    async fn fetch_access_token(&self, key: &ServiceAccountKey) -> Result<String, SheetsError> {
        let assertion = key.sign_assertion(READONLY_SCOPE, unix_now())?;
        let response = self
            .http
            .post(&key.token_uri)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;
        let response = ensure_success("token endpoint", response).await?;

        let token: TokenResponse = response.json().await.map_err(|err| SheetsError::Decode {
            endpoint: "token endpoint",
            message: err.to_string(),
        })?;
        Ok(token.access_token)
    }
}

#[async_trait]
impl SpreadsheetClient for GoogleSheetsClient {
    async fn read_range(&self, range: &str) -> Result<Vec<RawRow>, SheetsError> {
        let credentials_json = self
            .credentials_json
            .as_deref()
            .ok_or(SheetsError::MissingCredentials)?;
        let key = ServiceAccountKey::from_json(credentials_json)?;
        let sheet_id = self
            .sheet_id
            .as_deref()
            .filter(|id| !id.trim().is_empty())
            .ok_or(SheetsError::MissingSheetId)?;

        let access_token = self.fetch_access_token(&key).await?;
        let response = self
            .http
            .get(self.values_url(sheet_id, range))
            .bearer_auth(access_token)
            .send()
            .await?;
        let response = ensure_success("values endpoint", response).await?;

        let body: ValueRange = response.json().await.map_err(|err| SheetsError::Decode {
            endpoint: "values endpoint",
            message: err.to_string(),
        })?;
        debug!(range, rows = body.values.len(), "read spreadsheet range");
        Ok(body.values)
    }
}

async fn ensure_success(endpoint: &'static str, response: Response) -> Result<Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    Err(SheetsError::Api {
        endpoint,
        status: status.as_u16(),
        message: error_message(&text),
    })
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody::Api { error }) => error.message,
        Ok(ErrorBody::OAuth {
            error,
            error_description: Some(description),
        }) => format!("{error}: {description}"),
        Ok(ErrorBody::OAuth { error, .. }) => error,
        Err(_) => body.trim().to_string(),
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
