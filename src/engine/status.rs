use crate::config::StatusConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Real-world event state, as reported by the upstream feed or inferred
/// from elapsed time when the feed has gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    Scheduled,
    Live,
    Finished,
    Postponed,
}

impl GameStatus {
    /// Lenient parse for untrusted feed strings. Unknown values map to None
    /// so the deriver falls back to time-based inference.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Some(GameStatus::Scheduled),
            "live" => Some(GameStatus::Live),
            "finished" => Some(GameStatus::Finished),
            "postponed" => Some(GameStatus::Postponed),
            _ => None,
        }
    }
}

/// Lifecycle state of the wager itself, distinct from the game's state.
/// Won/Lost are only ever produced by settlement (see `settlement`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetStatus {
    Pending,
    Live,
    Won,
    Lost,
    Cancelled,
}

impl BetStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "pending" => Some(BetStatus::Pending),
            "live" => Some(BetStatus::Live),
            "won" => Some(BetStatus::Won),
            "lost" => Some(BetStatus::Lost),
            "cancelled" => Some(BetStatus::Cancelled),
            _ => None,
        }
    }
}

/// Inputs for one derivation. `current_time` is always injected by the
/// caller — the engine never reads a system clock, so results are
/// reproducible for any evaluation instant.
#[derive(Debug, Clone)]
pub struct GameTimeInfo {
    pub game_time: DateTime<Utc>,
    pub current_time: DateTime<Utc>,
    /// Authoritative status from the upstream feed, when available.
    pub game_status: Option<GameStatus>,
    /// Segment label (e.g. "Q3"). Carried through, never interpreted.
    pub period: Option<String>,
    /// Segment clock (e.g. "4:32"). Carried through, never interpreted.
    pub time_remaining: Option<String>,
}

impl GameTimeInfo {
    pub fn new(game_time: DateTime<Utc>, current_time: DateTime<Utc>) -> Self {
        Self {
            game_time,
            current_time,
            game_status: None,
            period: None,
            time_remaining: None,
        }
    }

    pub fn with_status(mut self, status: GameStatus) -> Self {
        self.game_status = Some(status);
        self
    }
}

/// Derivation result. Exactly one of the minute fields is populated,
/// except for an explicit-Live feed signal where `minutes_until_game`
/// is pinned to 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BetStatusInfo {
    pub status: BetStatus,
    pub game_status: GameStatus,
    pub minutes_until_game: Option<i64>,
    pub minutes_since_game: Option<i64>,
}

/// Derive the bet's lifecycle state from the game's temporal/status info.
///
/// An explicit feed status always wins over time arithmetic: it reflects
/// ground truth (rain delays, overtime) that wall-clock math cannot see.
/// The time-based fallback keeps results reasonable when the feed has gaps,
/// using two policy thresholds from `StatusConfig`:
///
/// - inside `live_window_min` of the scheduled start, the game is treated
///   as live;
/// - more than `settled_after_min` past the start, it is treated as
///   finished but unsettled.
///
/// A finished game stays `Pending` until settlement supplies a final value;
/// the deriver never guesses a winner.
pub fn derive_status(info: &GameTimeInfo, config: &StatusConfig) -> BetStatusInfo {
    // Floor division: a game 30s underway is minute -1, which keeps the
    // scheduled/live boundary exact at whole minutes.
    let minutes_until = (info.game_time - info.current_time)
        .num_seconds()
        .div_euclid(60);

    if let Some(status) = info.game_status {
        return match status {
            GameStatus::Scheduled => BetStatusInfo {
                status: BetStatus::Pending,
                game_status: GameStatus::Scheduled,
                minutes_until_game: Some(minutes_until),
                minutes_since_game: None,
            },
            GameStatus::Live => BetStatusInfo {
                status: BetStatus::Live,
                game_status: GameStatus::Live,
                minutes_until_game: Some(0),
                minutes_since_game: None,
            },
            GameStatus::Finished => BetStatusInfo {
                status: BetStatus::Pending,
                game_status: GameStatus::Finished,
                minutes_until_game: None,
                minutes_since_game: Some(minutes_until.abs()),
            },
            GameStatus::Postponed => BetStatusInfo {
                status: BetStatus::Cancelled,
                game_status: GameStatus::Postponed,
                minutes_until_game: Some(minutes_until),
                minutes_since_game: None,
            },
        };
    }

    let live_window = config.live_window_min;
    let settled_after = config.settled_after_min;

    if minutes_until > live_window {
        BetStatusInfo {
            status: BetStatus::Pending,
            game_status: GameStatus::Scheduled,
            minutes_until_game: Some(minutes_until),
            minutes_since_game: None,
        }
    } else if minutes_until > -live_window {
        BetStatusInfo {
            status: BetStatus::Live,
            game_status: GameStatus::Live,
            minutes_until_game: Some(minutes_until.max(0)),
            minutes_since_game: None,
        }
    } else {
        let minutes_since = -minutes_until;
        if minutes_since > settled_after {
            BetStatusInfo {
                status: BetStatus::Pending,
                game_status: GameStatus::Finished,
                minutes_until_game: None,
                minutes_since_game: Some(minutes_since),
            }
        } else {
            BetStatusInfo {
                status: BetStatus::Live,
                game_status: GameStatus::Live,
                minutes_until_game: None,
                minutes_since_game: Some(minutes_since),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minutes_before_start: i64) -> GameTimeInfo {
        let game_time = Utc.with_ymd_and_hms(2026, 1, 10, 19, 0, 0).unwrap();
        let current_time = game_time - chrono::Duration::minutes(minutes_before_start);
        GameTimeInfo::new(game_time, current_time)
    }

    #[test]
    fn test_far_future_is_pending() {
        let result = derive_status(&at(120), &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Pending);
        assert_eq!(result.game_status, GameStatus::Scheduled);
        assert_eq!(result.minutes_until_game, Some(120));
        assert_eq!(result.minutes_since_game, None);
    }

    #[test]
    fn test_scheduled_live_boundary() {
        // 16 minutes out: still scheduled. 15 minutes out: live window.
        let result = derive_status(&at(16), &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Pending);

        let result = derive_status(&at(15), &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Live);
        assert_eq!(result.game_status, GameStatus::Live);
        assert_eq!(result.minutes_until_game, Some(15));
    }

    #[test]
    fn test_recently_started_is_live_with_zero_until() {
        let result = derive_status(&at(-5), &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Live);
        assert_eq!(result.minutes_until_game, Some(0));
    }

    #[test]
    fn test_underway_is_live_with_since() {
        let result = derive_status(&at(-90), &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Live);
        assert_eq!(result.game_status, GameStatus::Live);
        assert_eq!(result.minutes_until_game, None);
        assert_eq!(result.minutes_since_game, Some(90));
    }

    #[test]
    fn test_live_finished_boundary() {
        // 180 minutes in: still live. 181: finished but unsettled.
        let result = derive_status(&at(-180), &StatusConfig::default());
        assert_eq!(result.game_status, GameStatus::Live);
        assert_eq!(result.minutes_since_game, Some(180));

        let result = derive_status(&at(-181), &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Pending);
        assert_eq!(result.game_status, GameStatus::Finished);
        assert_eq!(result.minutes_since_game, Some(181));
    }

    #[test]
    fn test_minute_arithmetic_floors() {
        // 30 seconds after the scheduled start -> minute -1, not 0.
        let game_time = Utc.with_ymd_and_hms(2026, 1, 10, 19, 0, 0).unwrap();
        let current_time = game_time + chrono::Duration::seconds(30);
        let info = GameTimeInfo::new(game_time, current_time);
        let result = derive_status(&info, &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Live);
        assert_eq!(result.minutes_until_game, Some(0));

        // 15m30s before the start floors to minute 15 -> inside the window.
        let current_time = game_time - chrono::Duration::seconds(15 * 60 + 30);
        let info = GameTimeInfo::new(game_time, current_time);
        let result = derive_status(&info, &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Live);
    }

    #[test]
    fn test_explicit_scheduled_dominates() {
        // Feed says scheduled even though the clock says the game is hours in.
        let info = at(-240).with_status(GameStatus::Scheduled);
        let result = derive_status(&info, &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Pending);
        assert_eq!(result.game_status, GameStatus::Scheduled);
        assert_eq!(result.minutes_until_game, Some(-240));
    }

    #[test]
    fn test_explicit_live_pins_until_to_zero() {
        let info = at(45).with_status(GameStatus::Live);
        let result = derive_status(&info, &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Live);
        assert_eq!(result.minutes_until_game, Some(0));
        assert_eq!(result.minutes_since_game, None);
    }

    #[test]
    fn test_explicit_finished_stays_pending() {
        let info = at(-30).with_status(GameStatus::Finished);
        let result = derive_status(&info, &StatusConfig::default());
        assert_eq!(result.status, BetStatus::Pending);
        assert_eq!(result.game_status, GameStatus::Finished);
        assert_eq!(result.minutes_since_game, Some(30));
    }

    #[test]
    fn test_postponed_always_cancels() {
        for minutes in [-500, -180, -1, 0, 15, 500] {
            let info = at(minutes).with_status(GameStatus::Postponed);
            let result = derive_status(&info, &StatusConfig::default());
            assert_eq!(result.status, BetStatus::Cancelled, "at {minutes}m");
            assert_eq!(result.game_status, GameStatus::Postponed);
        }
    }

    #[test]
    fn test_total_over_all_inputs() {
        let statuses = [
            None,
            Some(GameStatus::Scheduled),
            Some(GameStatus::Live),
            Some(GameStatus::Finished),
            Some(GameStatus::Postponed),
        ];
        for status in statuses {
            for minutes in [-10_000, -181, -180, -15, -14, 0, 14, 15, 16, 10_000] {
                let mut info = at(minutes);
                info.game_status = status;
                let result = derive_status(&info, &StatusConfig::default());
                assert!(
                    result.minutes_until_game.is_some() || result.minutes_since_game.is_some(),
                    "status={status:?} minutes={minutes}"
                );
            }
        }
    }

    #[test]
    fn test_custom_thresholds() {
        // Soccer-style config: shorter pre-game window, shorter game.
        let config = StatusConfig {
            live_window_min: 5,
            settled_after_min: 120,
        };
        let result = derive_status(&at(10), &config);
        assert_eq!(result.status, BetStatus::Pending);

        let result = derive_status(&at(-121), &config);
        assert_eq!(result.game_status, GameStatus::Finished);
    }

    #[test]
    fn test_status_parse_leniency() {
        assert_eq!(GameStatus::parse("LIVE"), Some(GameStatus::Live));
        assert_eq!(GameStatus::parse(" finished "), Some(GameStatus::Finished));
        assert_eq!(GameStatus::parse("delayed"), None);
        assert_eq!(BetStatus::parse("Won"), Some(BetStatus::Won));
        assert_eq!(BetStatus::parse("void"), None);
    }
}
