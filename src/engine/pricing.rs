//! Fair-value arithmetic behind the pricing and calibration dashboards.

/// Convert American odds to implied probability.
/// Positive odds (e.g., +150): prob = 100 / (odds + 100)
/// Negative odds (e.g., -150): prob = |odds| / (|odds| + 100)
pub fn implied_probability(odds: f64) -> f64 {
    if odds > 0.0 {
        100.0 / (odds + 100.0)
    } else {
        let abs = odds.abs();
        abs / (abs + 100.0)
    }
}

/// Expected value per unit stake of taking `american_odds` when the model's
/// fair win probability is `fair_prob`.
///
/// Payout multiple b = odds/100 for positive odds, 100/|odds| for negative.
/// EV = p*b - (1-p). Degenerate inputs (prob outside [0,1], zero odds)
/// return 0.
pub fn expected_value(fair_prob: f64, american_odds: f64) -> f64 {
    if !(0.0..=1.0).contains(&fair_prob) || american_odds == 0.0 {
        return 0.0;
    }
    let b = if american_odds > 0.0 {
        american_odds / 100.0
    } else {
        100.0 / american_odds.abs()
    };
    fair_prob * b - (1.0 - fair_prob)
}

/// Calibration bucket for a Brier score, as shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalibrationGrade {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl CalibrationGrade {
    pub fn label(&self) -> &'static str {
        match self {
            CalibrationGrade::Excellent => "Excellent",
            CalibrationGrade::Good => "Good",
            CalibrationGrade::Fair => "Fair",
            CalibrationGrade::Poor => "Poor",
        }
    }
}

/// Grade a Brier score (0.0 = perfect, 0.25 = coin flip on binary events).
pub fn grade_brier(score: f64) -> CalibrationGrade {
    if score <= 0.10 {
        CalibrationGrade::Excellent
    } else if score <= 0.18 {
        CalibrationGrade::Good
    } else if score <= 0.25 {
        CalibrationGrade::Fair
    } else {
        CalibrationGrade::Poor
    }
}

/// Scale a line's delta from the market median into a 0-100 edge score.
///
/// 0 = priced at the median; 100 = 10% or more away. Non-positive medians
/// score 0 (no reference to compare against).
pub fn edge_score(line: f64, median_line: f64) -> u8 {
    if median_line <= 0.0 {
        return 0;
    }
    let delta_pct = ((line - median_line).abs() / median_line) * 100.0;
    (delta_pct * 10.0).round().clamp(0.0, 100.0) as u8
}
