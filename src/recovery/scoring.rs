//! Recovery score and overtraining-risk classification

use crate::constants::{overtraining as ot, recovery as rc};
use crate::models::{OvertrainingRisk, RecoveryStatus, RecoveryZone, RiskLevel};

impl RecoveryZone {
    /// Traffic light for a 0-100 recovery score
    pub fn from_score(score: f64) -> Self {
        if score >= rc::GREEN_MIN_SCORE {
            RecoveryZone::Green
        } else if score >= rc::YELLOW_MIN_SCORE {
            RecoveryZone::Yellow
        } else {
            RecoveryZone::Red
        }
    }
}

impl RiskLevel {
    pub fn from_points(points: u32) -> Self {
        if points >= ot::HIGH_MIN_POINTS {
            RiskLevel::High
        } else if points >= ot::MODERATE_MIN_POINTS {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}

fn sleep_penalty(sleep_hours: f64) -> f64 {
    if sleep_hours < rc::SLEEP_SEVERE_HOURS {
        rc::SLEEP_SEVERE_PENALTY
    } else if sleep_hours < rc::SLEEP_MODERATE_HOURS {
        rc::SLEEP_MODERATE_PENALTY
    } else if sleep_hours < rc::SLEEP_MILD_HOURS {
        rc::SLEEP_MILD_PENALTY
    } else {
        0.0
    }
}

fn load_ratio_penalty(load_ratio: f64) -> f64 {
    if load_ratio > rc::RATIO_SEVERE {
        rc::RATIO_SEVERE_PENALTY
    } else if load_ratio > rc::RATIO_MODERATE {
        rc::RATIO_MODERATE_PENALTY
    } else if load_ratio > rc::RATIO_MILD {
        rc::RATIO_MILD_PENALTY
    } else {
        0.0
    }
}

/// Deduction-based recovery score, clamped to 0-100
///
/// Starts at 100 and subtracts for short sleep, soreness (3 per point),
/// an elevated acute:chronic ratio and each consecutive high-strain day.
pub fn recovery_score(
    sleep_hours: f64,
    soreness: f64,
    load_ratio: f64,
    consecutive_high_days: usize,
) -> RecoveryStatus {
    let score = rc::MAX_SCORE
        - sleep_penalty(sleep_hours)
        - soreness * rc::SORENESS_PENALTY_PER_POINT
        - load_ratio_penalty(load_ratio)
        - consecutive_high_days as f64 * rc::HIGH_DAY_PENALTY;
    let score = score.clamp(0.0, rc::MAX_SCORE);

    RecoveryStatus {
        score,
        status: RecoveryZone::from_score(score),
    }
}

/// Point-based overtraining risk with the reasons that contributed
pub fn overtraining_risk(
    load_ratio: f64,
    weekly_count: usize,
    high_rpe_count: usize,
    soreness_trend: f64,
) -> OvertrainingRisk {
    let mut points = 0;
    let mut factors = Vec::new();
    let mut flag = |add: u32, reason: &str| {
        points += add;
        factors.push(reason.to_string());
    };

    if load_ratio > ot::RATIO_SPIKE {
        flag(ot::RATIO_SPIKE_POINTS, "Acute load spike detected (AC ratio > 1.5)");
    } else if load_ratio > ot::RATIO_ELEVATED {
        flag(ot::RATIO_ELEVATED_POINTS, "Elevated acute load (AC ratio > 1.3)");
    }

    if weekly_count >= ot::WEEKLY_VERY_HIGH {
        flag(ot::WEEKLY_VERY_HIGH_POINTS, "Very high session frequency (10+/week)");
    } else if weekly_count >= ot::WEEKLY_HIGH {
        flag(ot::WEEKLY_HIGH_POINTS, "High session frequency (7+/week)");
    }

    if high_rpe_count >= ot::HIGH_RPE_MANY {
        flag(ot::HIGH_RPE_MANY_POINTS, "Too many high-RPE sessions (4+ in 7 days)");
    } else if high_rpe_count >= ot::HIGH_RPE_SEVERAL {
        flag(ot::HIGH_RPE_SEVERAL_POINTS, "Multiple high-RPE sessions (3 in 7 days)");
    }

    if soreness_trend > ot::SORENESS_HIGH {
        flag(ot::SORENESS_HIGH_POINTS, "Soreness trending upward");
    } else if soreness_trend > ot::SORENESS_MODERATE {
        flag(ot::SORENESS_MODERATE_POINTS, "Moderate soreness reported");
    }

    OvertrainingRisk {
        level: RiskLevel::from_points(points),
        factors,
    }
}
