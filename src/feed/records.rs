use crate::engine::{BetSide, GameStatus, GameTimeInfo};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A wagered prop line as stored by the backend, read from a JSON snapshot.
/// Status and side arrive as free-form strings and are normalized here.
#[derive(Debug, Clone, Deserialize)]
pub struct BetRecord {
    pub id: String,
    pub player: String,
    /// Statistic the line is against, e.g. "passing_yards".
    pub market: String,
    pub line: f64,
    pub side: String,
    /// Scheduled start, RFC 3339.
    pub game_time: String,
    #[serde(default)]
    pub game_status: Option<String>,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub time_remaining: Option<String>,
    /// Final observed statistic, once the game is over.
    #[serde(default)]
    pub final_value: Option<f64>,
}

pub fn parse_snapshot(json: &str) -> Result<Vec<BetRecord>> {
    serde_json::from_str(json).context("Failed to parse bet snapshot JSON")
}

impl BetRecord {
    /// Build the engine input for an evaluation at `now`.
    ///
    /// An unparseable `game_time` is rejected here so the engine only ever
    /// sees valid timestamps. An unrecognized `game_status` string degrades
    /// to time-based inference with a warning.
    pub fn time_info(&self, now: DateTime<Utc>) -> Result<GameTimeInfo> {
        let game_time = DateTime::parse_from_rfc3339(&self.game_time)
            .with_context(|| {
                format!("bet {}: unparseable game_time {:?}", self.id, self.game_time)
            })?
            .with_timezone(&Utc);

        let game_status = self.game_status.as_deref().and_then(|raw| {
            let parsed = GameStatus::parse(raw);
            if parsed.is_none() {
                tracing::warn!(bet = %self.id, raw, "unrecognized game_status, inferring from time");
            }
            parsed
        });

        Ok(GameTimeInfo {
            game_time,
            current_time: now,
            game_status,
            period: self.period.clone(),
            time_remaining: self.time_remaining.clone(),
        })
    }

    /// None for unrecognized side strings, which skips settlement.
    pub fn bet_side(&self) -> Option<BetSide> {
        BetSide::parse(&self.side)
    }
}
