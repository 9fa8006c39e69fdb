use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalLight {
    Green,
    Yellow,
    Red,
}

impl SignalLight {
    pub fn from_daily_pl(daily_pl: Decimal) -> Self {
        if daily_pl > Decimal::ZERO {
            Self::Green
        } else if daily_pl < Decimal::ZERO {
            Self::Red
        } else {
            Self::Yellow
        }
    }
}

/// Rounds half away from zero and always renders two fractional digits.
/// Negative values that round to zero keep their sign, as in `-0.00`.
pub fn format_two_places(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);

    if rounded.is_zero() && value < Decimal::ZERO {
        format!("-{}", rounded.abs())
    } else {
        rounded.to_string()
    }
}

pub fn narrative(total_gain_loss: Decimal, daily_pl: Decimal) -> String {
    if total_gain_loss >= Decimal::ZERO {
        format!(
            "Vas ganando {} USD total; hoy aporta {}.",
            format_two_places(total_gain_loss),
            format_two_places(daily_pl)
        )
    } else {
        format!(
            "Vas perdiendo {} USD total; hoy resta {}.",
            format_two_places(total_gain_loss.abs()),
            format_two_places(daily_pl)
        )
    }
}
