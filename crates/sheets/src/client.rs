use async_trait::async_trait;
use ledger::RawRow;

use crate::error::SheetsError;

pub const ASSETS_RANGE: &str = "DIARIO_RAW!A2:K";
pub const CONFIG_RANGE: &str = "CONFIG!A2:B4";
pub const READONLY_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// Read-only access to one spreadsheet.
///
/// Each call is a fresh fetch; implementations keep no state between calls.
#[async_trait]
pub trait SpreadsheetClient: Send + Sync {
    async fn read_range(&self, range: &str) -> Result<Vec<RawRow>, SheetsError>;
}
