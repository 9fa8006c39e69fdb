pub mod assets;
pub mod cell;
pub mod config_map;
pub mod row;
pub mod signal;

pub use assets::{aggregate_assets, latest_by_ticker, AssetSnapshot};
pub use cell::{coerce_number, parse_decimal_text, Cell, RawRow};
pub use config_map::{reduce_config_rows, ConfigMap};
pub use row::{LedgerRow, RowError};
pub use signal::{format_two_places, narrative, SignalLight};

pub fn module_ready() -> bool {
    true
}
