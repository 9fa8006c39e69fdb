use std::collections::HashMap;

use async_trait::async_trait;
use ledger::RawRow;

use crate::{client::SpreadsheetClient, error::SheetsError};

/// Serves fixed rows per range, or fails every read with one error.
#[derive(Debug, Clone, Default)]
pub struct InMemorySheetClient {
    ranges: HashMap<String, Vec<RawRow>>,
    failure: Option<SheetsError>,
}

impl InMemorySheetClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: impl Into<String>, rows: Vec<RawRow>) -> Self {
        self.ranges.insert(range.into(), rows);
        self
    }

    pub fn failing(error: SheetsError) -> Self {
        Self {
            ranges: HashMap::new(),
            failure: Some(error),
        }
    }
}

#[async_trait]
impl SpreadsheetClient for InMemorySheetClient {
    async fn read_range(&self, range: &str) -> Result<Vec<RawRow>, SheetsError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        self.ranges
            .get(range)
            .cloned()
            .ok_or_else(|| SheetsError::RangeNotFound(range.to_string()))
    }
}
