//! Display formatting for derived bet state: time descriptors, status
//! labels/colors, and the CLI table rows.

use crate::engine::{BetStatus, BetStatusInfo};
use crate::feed::BetRecord;

const GRAY: &str = "#6B7280";

impl BetStatus {
    /// Fixed display label.
    pub fn label(&self) -> &'static str {
        match self {
            BetStatus::Won => "Won",
            BetStatus::Lost => "Lost",
            BetStatus::Live => "Live",
            BetStatus::Pending => "Pending",
            BetStatus::Cancelled => "Cancelled",
        }
    }

    /// Fixed display color (hex token consumed by the UI theme).
    pub fn color(&self) -> &'static str {
        match self {
            BetStatus::Won => "#10B981",
            BetStatus::Lost => "#EF4444",
            BetStatus::Live => "#F59E0B",
            BetStatus::Pending => "#3B82F6",
            BetStatus::Cancelled => GRAY,
        }
    }
}

/// Label for an untrusted status string; "Unknown" outside the five
/// known values.
pub fn status_label(raw: &str) -> &'static str {
    BetStatus::parse(raw).map_or("Unknown", |s| s.label())
}

/// Color for an untrusted status string; gray outside the known values.
pub fn status_color(raw: &str) -> &'static str {
    BetStatus::parse(raw).map_or(GRAY, |s| s.color())
}

/// Render the derived minute fields as a human-readable descriptor.
///
/// "Starting now" / "In 41m" / "In 2h 5m" before the start, "41m ago" /
/// "2h 5m ago" after it, "Unknown" when neither field is populated.
pub fn format_game_time(info: &BetStatusInfo) -> String {
    if let Some(until) = info.minutes_until_game {
        if until <= 0 {
            "Starting now".to_string()
        } else if until < 60 {
            format!("In {until}m")
        } else {
            format!("In {}h {}m", until / 60, until % 60)
        }
    } else if let Some(since) = info.minutes_since_game {
        if since < 60 {
            format!("{since}m ago")
        } else {
            format!("{}h {}m ago", since / 60, since % 60)
        }
    } else {
        "Unknown".to_string()
    }
}

/// One table line for the CLI report.
pub fn render_row(record: &BetRecord, result: &BetStatusInfo) -> String {
    let settled = record
        .final_value
        .map_or(String::new(), |v| format!(" (final {v})"));
    format!(
        "{:<8} {:<16} {:<16} {:>6.1} {:<5} {:<9} {}{}",
        record.id,
        record.player,
        record.market,
        record.line,
        record.side,
        result.status.label(),
        format_game_time(result),
        settled,
    )
}

pub fn render_header() -> String {
    format!(
        "{:<8} {:<16} {:<16} {:>6} {:<5} {:<9} {}",
        "ID", "PLAYER", "MARKET", "LINE", "SIDE", "STATUS", "TIME"
    )
}
