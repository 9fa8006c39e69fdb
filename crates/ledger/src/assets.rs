use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::{
    cell::RawRow,
    row::LedgerRow,
    signal::{narrative, SignalLight},
};

/// Latest known state of one ticker, in the dashboard's wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssetSnapshot {
    pub ticker: String,
    #[serde(rename = "precio")]
    pub price: Decimal,
    #[serde(rename = "plDiario")]
    pub daily_pl: Decimal,
    #[serde(rename = "gpTotal")]
    pub total_gain_loss: Decimal,
    #[serde(rename = "valorNeto")]
    pub net_value: Decimal,
    pub light: SignalLight,
    pub phrase: String,
}

impl From<LedgerRow> for AssetSnapshot {
    fn from(row: LedgerRow) -> Self {
        Self {
            light: SignalLight::from_daily_pl(row.daily_pl),
            phrase: narrative(row.total_gain_loss, row.daily_pl),
            ticker: row.ticker,
            price: row.price,
            daily_pl: row.daily_pl,
            total_gain_loss: row.total_gain_loss,
            net_value: row.net_value,
        }
    }
}

/// Last-write-wins reduction of the row log, keyed by ticker.
pub fn latest_by_ticker(rows: &[RawRow]) -> BTreeMap<String, LedgerRow> {
    let mut latest = BTreeMap::new();

    for (index, cells) in rows.iter().enumerate() {
        match LedgerRow::decode(cells) {
            Ok(row) => {
                latest.insert(row.ticker.clone(), row);
            }
            Err(error) => debug!(index, %error, "skipping ledger row"),
        }
    }

    latest
}

pub fn aggregate_assets(rows: &[RawRow]) -> Vec<AssetSnapshot> {
    latest_by_ticker(rows)
        .into_values()
        .map(AssetSnapshot::from)
        .collect()
}
