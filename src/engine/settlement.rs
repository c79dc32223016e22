use super::status::{derive_status, BetStatus, BetStatusInfo, GameStatus, GameTimeInfo};
use crate::config::StatusConfig;
use serde::{Deserialize, Serialize};

/// Direction of an over/under prop wager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    Over,
    Under,
}

impl BetSide {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "over" => Some(BetSide::Over),
            "under" => Some(BetSide::Under),
            _ => None,
        }
    }
}

/// Settle a bet against the game's final statistic.
///
/// Derives the base status first, then overrides Pending with Won/Lost only
/// when the game resolved to Finished AND all three settlement inputs are
/// present. A finished game with missing inputs stays Pending — settlement
/// never guesses. Game status and the minute fields pass through untouched.
///
/// An exact tie (`final_value == line`) settles Lost on both sides: neither
/// strict inequality holds. Push refunds are the money-settlement layer's
/// concern, not this resolver's.
pub fn resolve_settlement(
    info: &GameTimeInfo,
    final_value: Option<f64>,
    line: Option<f64>,
    side: Option<BetSide>,
    config: &StatusConfig,
) -> BetStatusInfo {
    let mut result = derive_status(info, config);

    if result.game_status != GameStatus::Finished {
        return result;
    }
    let (Some(final_value), Some(line), Some(side)) = (final_value, line, side) else {
        return result;
    };

    let won = match side {
        BetSide::Over => final_value > line,
        BetSide::Under => final_value < line,
    };
    result.status = if won { BetStatus::Won } else { BetStatus::Lost };
    result
}
