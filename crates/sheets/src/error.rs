use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SheetsError {
    #[error("GOOGLE_SERVICE_ACCOUNT_JSON is not set")]
    MissingCredentials,
    #[error("SHEET_ID is not set")]
    MissingSheetId,
    #[error("invalid service account credentials: {0}")]
    InvalidCredentials(String),
    #[error("failed to sign token request: {0}")]
    Signing(String),
    #[error("spreadsheet request failed: {0}")]
    Transport(String),
    #[error("{endpoint} returned {status}: {message}")]
    Api {
        endpoint: &'static str,
        status: u16,
        message: String,
    },
    #[error("unexpected response from {endpoint}: {message}")]
    Decode {
        endpoint: &'static str,
        message: String,
    },
    #[error("Unable to parse range: {0}")]
    RangeNotFound(String),
}

impl From<reqwest::Error> for SheetsError {
    fn from(error: reqwest::Error) -> Self {
        Self::Transport(error.to_string())
    }
}
