use std::sync::Arc;

use sheets::{SpreadsheetClient, ASSETS_RANGE, CONFIG_RANGE};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SheetRanges {
    pub assets: String,
    pub config: String,
}

impl Default for SheetRanges {
    fn default() -> Self {
        Self {
            assets: ASSETS_RANGE.to_string(),
            config: CONFIG_RANGE.to_string(),
        }
    }
}

/// Per-process handles shared by every request. Nothing here is mutated
/// after startup.
#[derive(Clone)]
pub struct AppState {
    sheets: Arc<dyn SpreadsheetClient>,
    ranges: SheetRanges,
}

impl AppState {
    pub fn new(sheets: Arc<dyn SpreadsheetClient>, ranges: SheetRanges) -> Self {
        Self { sheets, ranges }
    }

    pub fn sheets(&self) -> &dyn SpreadsheetClient {
        self.sheets.as_ref()
    }

    pub fn ranges(&self) -> &SheetRanges {
        &self.ranges
    }
}
