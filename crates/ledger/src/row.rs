use rust_decimal::Decimal;
use thiserror::Error;

use crate::cell::{coerce_number, Cell};

pub const TICKER_COLUMN: usize = 6;
pub const PRICE_COLUMN: usize = 7;
pub const DAILY_PL_COLUMN: usize = 8;
pub const TOTAL_GAIN_LOSS_COLUMN: usize = 9;
pub const NET_VALUE_COLUMN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("row has {len} cells and no ticker column")]
    TooShort { len: usize },
    #[error("row has an empty ticker cell")]
    MissingTicker,
}

/// A `DIARIO_RAW` row decoded into named fields.
///
/// The values endpoint drops trailing blank cells, so only the ticker column
/// is required. Numeric columns past the end of the row read as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LedgerRow {
    pub ticker: String,
    pub price: Decimal,
    pub daily_pl: Decimal,
    pub total_gain_loss: Decimal,
    pub net_value: Decimal,
}

impl LedgerRow {
    pub fn decode(cells: &[Cell]) -> Result<Self, RowError> {
        let ticker = cells
            .get(TICKER_COLUMN)
            .ok_or(RowError::TooShort { len: cells.len() })?
            .to_text()
            .filter(|ticker| !ticker.is_empty())
            .ok_or(RowError::MissingTicker)?;

        Ok(Self {
            ticker,
            price: coerce_number(cells.get(PRICE_COLUMN)),
            daily_pl: coerce_number(cells.get(DAILY_PL_COLUMN)),
            total_gain_loss: coerce_number(cells.get(TOTAL_GAIN_LOSS_COLUMN)),
            net_value: coerce_number(cells.get(NET_VALUE_COLUMN)),
        })
    }
}
