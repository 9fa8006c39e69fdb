use std::collections::BTreeMap;

use tracing::debug;

use crate::cell::RawRow;

pub type ConfigMap = BTreeMap<String, String>;

/// Folds `(key, value)` rows into a flat map, later keys overwriting earlier.
///
/// Rows with a blank key or without a value cell are skipped. A value cell
/// that is present but empty is kept as `""`.
pub fn reduce_config_rows(rows: &[RawRow]) -> ConfigMap {
    let mut config = ConfigMap::new();

    for (index, row) in rows.iter().enumerate() {
        let key = row.first().and_then(|cell| cell.to_text());
        let value = row.get(1).and_then(|cell| cell.to_text());

        match (key, value) {
            (Some(key), Some(value)) if !key.is_empty() => {
                config.insert(key, value);
            }
            _ => debug!(index, "skipping incomplete config row"),
        }
    }

    config
}
