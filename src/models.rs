use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Athlete sex, used to pick the per-session sauna loss rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => write!(f, "male"),
            Sex::Female => write!(f, "female"),
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Invalid sex: {}", s)),
        }
    }
}

/// Three-band safety classification used for dehydration and the overall cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafetyZone {
    /// Minimal performance impact
    Green,
    /// Needs 12h+ recovery and aggressive rehydration
    Orange,
    /// Significant performance decrement
    Red,
}

impl fmt::Display for SafetyZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SafetyZone::Green => write!(f, "green"),
            SafetyZone::Orange => write!(f, "orange"),
            SafetyZone::Red => write!(f, "red"),
        }
    }
}

/// Snapshot of the athlete's situation going into fight week
///
/// `current_weight_kg >= target_weight_kg` is expected for a cut but is not
/// enforced; see [`ProjectionInput::validate`] for the caller-side checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    /// Normally 1-14
    pub days_until_weigh_in: u32,
    pub sex: Sex,
}

/// One calendar day of the fight-week protocol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayProjection {
    /// Countdown offset: -(days - 1) .. 0, where 0 is the weigh-in
    pub day: i32,
    /// "7 Days Out", "1 Day Out", "Weigh-In Day"
    pub label: String,
    pub projected_weight_kg: f64,
    pub carb_target_g: f64,
    pub fibre_target_g: f64,
    pub sodium_target_mg: f64,
    pub fluid_target_ml: f64,
    /// Protocol notes for this day
    pub actions: Vec<String>,
}

/// Full fight-week projection: loss breakdown, safety and daily timeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub total_to_cut_kg: f64,
    pub glycogen_loss_kg: f64,
    pub fibre_loss_kg: f64,
    pub sodium_loss_kg: f64,
    pub water_loading_loss_kg: f64,
    /// Sum of the four diet-driven components
    pub diet_total_kg: f64,
    /// max(0, total_to_cut - diet_total)
    pub dehydration_needed_kg: f64,
    pub dehydration_percent_bw: f64,
    pub dehydration_safety: SafetyZone,
    pub overall_safety: SafetyZone,
    /// Max safe acute weight loss for this timeline
    pub max_safe_awl_kg: f64,
    /// total_to_cut as a percentage of body weight
    pub percent_bw: f64,
    pub sauna_sessions: u32,
    pub timeline: Vec<DayProjection>,
}

/// Self-reported session intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    #[default]
    Moderate,
    High,
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Moderate => write!(f, "moderate"),
            Intensity::High => write!(f, "high"),
        }
    }
}

/// A logged training session as stored by the app
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRow {
    pub id: String,
    /// Calendar day, no time component
    pub date: NaiveDate,
    pub session_type: String,
    pub duration_minutes: u32,
    /// Rate of perceived exertion, 1-10
    pub rpe: u8,
    #[serde(default)]
    pub intensity: Intensity,
    /// 0-10, 0 meaning not recorded
    #[serde(default)]
    pub soreness_level: u8,
    /// 0 meaning not recorded
    #[serde(default)]
    pub sleep_hours: f64,
}

/// Recovery traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecoveryZone {
    Green,
    Yellow,
    Red,
}

impl fmt::Display for RecoveryZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryZone::Green => write!(f, "green"),
            RecoveryZone::Yellow => write!(f, "yellow"),
            RecoveryZone::Red => write!(f, "red"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryStatus {
    /// 0-100
    pub score: f64,
    pub status: RecoveryZone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "low"),
            RiskLevel::Moderate => write!(f, "moderate"),
            RiskLevel::High => write!(f, "high"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertrainingRisk {
    pub level: RiskLevel,
    /// Human-readable reasons, in evaluation order
    pub factors: Vec<String>,
}

/// Strain for one calendar day, used for the 7-day chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStrainEntry {
    pub date: NaiveDate,
    pub strain: f64,
    pub load: f64,
    pub session_count: usize,
}

/// Tomorrow's strain and AC ratio if the recent daily load carries on
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub predicted_strain: f64,
    pub predicted_ac_ratio: f64,
}

/// Everything the recovery dashboard shows for a given day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllMetrics {
    /// Today's strain, 0-21
    pub strain: f64,
    pub recovery_score: RecoveryStatus,
    pub ac_ratio: f64,
    pub overtraining_risk: OvertrainingRisk,
    pub weekly_session_count: usize,
    pub avg_sleep_hours: f64,
    pub latest_sleep_hours: f64,
    pub latest_soreness: u8,
    pub consecutive_high_days: usize,
    /// Today's raw RPE x minutes load
    pub daily_load: f64,
    /// Sum of the last 7 daily loads
    pub acute_load: f64,
    /// Average weekly load over the last 4 weeks
    pub chronic_load: f64,
    /// Last 7 days, oldest first
    pub strain_history: Vec<DailyStrainEntry>,
    /// Newest first, capped for the summarization payload
    pub recent_sessions: Vec<SessionRow>,
    pub forecast: Forecast,
}
