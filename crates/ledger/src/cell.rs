use std::str::FromStr;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One spreadsheet cell as returned by the values endpoint.
///
/// Formatted reads come back as strings, unformatted ones as numbers or
/// booleans, and blank cells inside a row as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Text(String),
    Number(f64),
    Bool(bool),
    Empty,
}

pub type RawRow = Vec<Cell>;

impl Cell {
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => Some(value.to_string()),
            Self::Bool(value) => Some(value.to_string()),
            Self::Empty => None,
        }
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Lenient numeric read of a cell. Missing, blank or unparseable input is zero.
pub fn coerce_number(cell: Option<&Cell>) -> Decimal {
    match cell {
        Some(Cell::Text(value)) => parse_decimal_text(value),
        Some(Cell::Number(value)) => decimal_from_f64(*value),
        Some(Cell::Bool(_)) | Some(Cell::Empty) | None => Decimal::ZERO,
    }
}

/// Strips `$` and `,`, trims, then parses plain or scientific notation.
pub fn parse_decimal_text(raw: &str) -> Decimal {
    let stripped: String = raw.chars().filter(|ch| !matches!(ch, '$' | ',')).collect();
    let cleaned = stripped.trim();

    // rust_decimal accepts digit separators, sheet users never mean them
    if cleaned.is_empty() || cleaned.contains('_') {
        return Decimal::ZERO;
    }

    Decimal::from_str(cleaned)
        .or_else(|_| Decimal::from_scientific(cleaned))
        .or_else(|_| cleaned.parse::<f64>().map(decimal_from_f64))
        .unwrap_or(Decimal::ZERO)
}

/// Finite values outside the decimal range clamp to `Decimal::MAX`/`MIN`.
fn decimal_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }

    match Decimal::from_f64(value) {
        Some(decimal) => decimal,
        None if value.abs() < 1.0 => Decimal::ZERO,
        None if value > 0.0 => Decimal::MAX,
        None => Decimal::MIN,
    }
}
