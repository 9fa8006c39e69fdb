use std::{
    env, fmt,
    net::{AddrParseError, SocketAddr},
};

use thiserror::Error;

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8888";
const DEFAULT_ASSETS_RANGE: &str = sheets::ASSETS_RANGE;
const DEFAULT_CONFIG_RANGE: &str = sheets::CONFIG_RANGE;
const DEFAULT_SHEETS_API_BASE: &str = sheets::DEFAULT_API_BASE;
const DEFAULT_LOG_FORMAT: LogFormat = LogFormat::Text;

const ENV_ADDR: &str = "SELDON_SERVER_ADDR";
const ENV_SHEET_ID: &str = "SHEET_ID";
const ENV_SERVICE_ACCOUNT: &str = "GOOGLE_SERVICE_ACCOUNT_JSON";
const ENV_ASSETS_RANGE: &str = "SELDON_ASSETS_RANGE";
const ENV_CONFIG_RANGE: &str = "SELDON_CONFIG_RANGE";
const ENV_SHEETS_API_BASE: &str = "SELDON_SHEETS_API_BASE";
const ENV_LOG_FORMAT: &str = "SELDON_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Process configuration, read once at startup.
///
/// The sheet id and service-account key stay optional here; requests made
/// without them fail individually instead of keeping the server down.
#[derive(Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub sheet_id: Option<String>,
    pub service_account_json: Option<String>,
    pub assets_range: String,
    pub config_range: String,
    pub sheets_api_base: String,
    pub log_format: LogFormat,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("listen_addr", &self.listen_addr)
            .field("sheet_id", &self.sheet_id)
            .field(
                "service_account_json",
                &self.service_account_json.as_ref().map(|_| "<redacted>"),
            )
            .field("assets_range", &self.assets_range)
            .field("config_range", &self.config_range)
            .field("sheets_api_base", &self.sheets_api_base)
            .field("log_format", &self.log_format)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("SELDON_SERVER_ADDR is not a valid socket address: {0}")]
    InvalidListenAddr(#[source] AddrParseError),
    #[error("SELDON_LOG_FORMAT must be one of: text, json")]
    InvalidLogFormat,
    #[error("{0} must not be empty or whitespace")]
    Blank(&'static str),
    #[error("{0} contains non-unicode data")]
    NonUnicode(&'static str),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let listen_addr = match read_env(ENV_ADDR)? {
            Some(value) => value.parse().map_err(ConfigError::InvalidListenAddr)?,
            None => DEFAULT_LISTEN_ADDR
                .parse()
                .map_err(ConfigError::InvalidListenAddr)?,
        };

        let log_format = match read_env(ENV_LOG_FORMAT)? {
            Some(value) => LogFormat::parse(value.trim()).ok_or(ConfigError::InvalidLogFormat)?,
            None => DEFAULT_LOG_FORMAT,
        };

        Ok(Self {
            listen_addr,
            sheet_id: read_env(ENV_SHEET_ID)?.filter(|value| !value.trim().is_empty()),
            service_account_json: read_env(ENV_SERVICE_ACCOUNT)?
                .filter(|value| !value.trim().is_empty()),
            assets_range: non_blank_env(ENV_ASSETS_RANGE, DEFAULT_ASSETS_RANGE)?,
            config_range: non_blank_env(ENV_CONFIG_RANGE, DEFAULT_CONFIG_RANGE)?,
            sheets_api_base: non_blank_env(ENV_SHEETS_API_BASE, DEFAULT_SHEETS_API_BASE)?,
            log_format,
        })
    }
}

fn read_env(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(Some(value)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(ConfigError::NonUnicode(key)),
    }
}

fn non_blank_env(key: &'static str, default_value: &str) -> Result<String, ConfigError> {
    match read_env(key)? {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(key)),
        Some(value) => Ok(value.trim().to_string()),
        None => Ok(default_value.to_owned()),
    }
}
