//! Domain constants for the fight-week and recovery engines
//!
//! Every threshold used by the projection and scoring formulas lives here so
//! it can be audited against its source and tested on its own.
//!
//! References:
//! - ISSN Position Stand: Weight Cutting in Combat Sports (Ricci et al., 2025)
//! - Reale, R., Slater, G. & Burke, L.M. (2017). Acute-weight-loss strategies
//!   for combat sports and applications to Olympic success
//! - Gabbett, T.J. (2016). The training-injury prevention paradox

/// Glycogen and bound-water depletion
///
/// 1g of glycogen binds roughly 2.7g of water. A <50g/day carbohydrate
/// protocol over 3-7 days yields about 2% of body mass.
/// Reference: ISSN 2025 §5.4.1
pub mod glycogen {
    /// Achievable loss as a fraction of body mass
    pub const LOSS_FRACTION_BW: f64 = 0.02;

    /// Hard cap on glycogen-driven loss (kg)
    pub const MAX_LOSS_KG: f64 = 2.5;

    /// Fewer days than this only allows partial depletion
    pub const FULL_DEPLETION_DAYS: u32 = 3;

    /// Fraction of the full loss achievable with too little time
    pub const PARTIAL_DEPLETION_SCALE: f64 = 0.3;
}

/// Fibre / gut-content reduction
///
/// Gut transit time (10-96h) gates how much of a low-residue diet shows up
/// on the scale.
/// Reference: ISSN 2025 §5.4.2
pub mod fibre {
    /// Below this there is no measurable gut-content benefit
    pub const MIN_DAYS: u32 = 2;

    /// Upper bound (exclusive) of the short-notice stage
    pub const SHORT_STAGE_DAYS: u32 = 4;

    /// Upper bound (exclusive) of the medium stage
    pub const MEDIUM_STAGE_DAYS: u32 = 7;

    pub const SHORT_LOSS_FRACTION_BW: f64 = 0.004;
    pub const MEDIUM_LOSS_FRACTION_BW: f64 = 0.007;
    pub const FULL_LOSS_FRACTION_BW: f64 = 0.01;

    /// Hard cap on gut-content loss (kg)
    pub const MAX_LOSS_KG: f64 = 1.0;
}

/// Sodium manipulation and extracellular water
///
/// Electrolyte balance takes 2-3 days to shift.
/// Reference: ISSN 2025 §5.4.3
pub mod sodium {
    pub const MIN_DAYS: u32 = 3;
    pub const LOSS_FRACTION_BW: f64 = 0.007;
    pub const MAX_LOSS_KG: f64 = 1.0;
}

/// Water loading (100ml/kg/day for 3 days, then 15ml/kg/day)
///
/// Reference: ISSN 2025 §5.4.4, Reale et al. 2018 (3.2% vs 2.4% BM loss)
pub mod water_loading {
    /// Three loading days plus at least one restriction day
    pub const MIN_DAYS: u32 = 4;

    /// Extra loss over a non-loading control (fraction of body mass)
    pub const LOSS_FRACTION_BW: f64 = 0.008;

    /// Number of loading days at the start of the protocol
    pub const LOAD_DAYS: u32 = 3;
}

/// Safety classification thresholds
///
/// Reference: ISSN 2025 §5.4.5 and Position 7 (UFC weigh-in data)
pub mod safety {
    /// Dehydration at or below this share of body mass is green
    pub const DEHYDRATION_GREEN_MAX_PCT: f64 = 2.0;

    /// Dehydration at or below this share of body mass is orange
    pub const DEHYDRATION_ORANGE_MAX_PCT: f64 = 4.0;

    /// Overall cut at or below this share of body mass is green
    pub const OVERALL_GREEN_MAX_PCT: f64 = 5.0;

    /// Overall cut at or below this share of body mass is orange
    pub const OVERALL_ORANGE_MAX_PCT: f64 = 8.0;

    /// Max safe acute weight loss with 3+ days available
    pub const AWL_FRACTION_3_DAYS: f64 = 0.067;

    /// Max safe acute weight loss with 2 days available
    pub const AWL_FRACTION_2_DAYS: f64 = 0.057;

    /// Max safe acute weight loss with 1 day or less
    pub const AWL_FRACTION_1_DAY: f64 = 0.044;
}

/// Sauna dehydration (4 x 10min at ~90°C per session)
pub mod sauna {
    pub const MALE_LOSS_FRACTION_PER_SESSION: f64 = 0.007;
    pub const FEMALE_LOSS_FRACTION_PER_SESSION: f64 = 0.006;
}

/// Fight-week tapering targets
pub mod taper {
    /// Carbohydrate grams per kg on the opening day
    pub const CARB_START_G_PER_KG: f64 = 2.0;

    /// Carbohydrate grams per kg through the middle of the week
    pub const CARB_MID_G_PER_KG: f64 = 1.0;

    /// Carbohydrate ceiling for the final days (g)
    pub const CARB_FINAL_G: f64 = 50.0;

    /// Carbohydrate target after day one of a 1-2 day plan (g)
    pub const CARB_SHORT_NOTICE_G: f64 = 30.0;

    /// Plans this short skip the three-stage carb taper
    pub const SHORT_NOTICE_MAX_DAYS: u32 = 2;

    pub const FIBRE_EARLY_G: f64 = 15.0;
    pub const FIBRE_LATE_G: f64 = 8.0;
    pub const FIBRE_WEIGH_IN_G: f64 = 0.0;

    /// Share of the plan (in days out) that stays on the early fibre target
    pub const FIBRE_EARLY_SHARE: f64 = 0.7;

    pub const SODIUM_EARLY_MG: f64 = 2500.0;
    pub const SODIUM_LATE_MG: f64 = 2000.0;
    pub const SODIUM_WEIGH_IN_MG: f64 = 1500.0;

    /// Share of the plan (in days out) that stays on the early sodium target
    pub const SODIUM_EARLY_SHARE: f64 = 0.6;

    pub const FLUID_LOAD_ML_PER_KG: f64 = 100.0;
    pub const FLUID_NORMAL_ML_PER_KG: f64 = 40.0;
    pub const FLUID_RESTRICT_ML_PER_KG: f64 = 15.0;
    pub const FLUID_WEIGH_IN_ML_PER_KG: f64 = 5.0;
}

/// Daily strain scale
pub mod strain {
    /// Multiplier on log2(1 + load / divisor)
    pub const LOG_SCALE: f64 = 7.0;

    /// Load divisor inside the logarithm
    pub const LOAD_DIVISOR: f64 = 100.0;

    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 21.0;

    /// Days above this strain count as high-strain days
    pub const HIGH_THRESHOLD: f64 = 14.0;
}

/// Rolling windows (days, counting today)
pub mod window {
    pub const ACUTE_DAYS: usize = 7;
    pub const CHRONIC_DAYS: usize = 28;

    /// Chronic load is reported as an average week over this many weeks
    pub const CHRONIC_WEEKS: f64 = 4.0;

    /// Sleep and soreness look back this many days for a recorded value
    pub const LOOKBACK_DAYS: usize = 3;

    /// AC ratio reported when there is no chronic load at all
    pub const DEFAULT_AC_RATIO: f64 = 1.0;

    /// Sleep assumed when nothing was logged in the look-back window
    pub const DEFAULT_SLEEP_HOURS: f64 = 8.0;

    /// Cap on sessions handed to the summarization payload
    pub const RECENT_SESSION_LIMIT: usize = 15;

    /// Tomorrow's load is forecast as the mean of this many recent days
    pub const FORECAST_AVERAGE_DAYS: usize = 3;
}

/// Recovery score deductions (score starts at 100)
pub mod recovery {
    pub const MAX_SCORE: f64 = 100.0;

    pub const SLEEP_SEVERE_HOURS: f64 = 6.0;
    pub const SLEEP_MODERATE_HOURS: f64 = 7.0;
    pub const SLEEP_MILD_HOURS: f64 = 8.0;
    pub const SLEEP_SEVERE_PENALTY: f64 = 30.0;
    pub const SLEEP_MODERATE_PENALTY: f64 = 15.0;
    pub const SLEEP_MILD_PENALTY: f64 = 5.0;

    pub const SORENESS_PENALTY_PER_POINT: f64 = 3.0;

    pub const RATIO_SEVERE: f64 = 1.5;
    pub const RATIO_MODERATE: f64 = 1.3;
    pub const RATIO_MILD: f64 = 1.1;
    pub const RATIO_SEVERE_PENALTY: f64 = 25.0;
    pub const RATIO_MODERATE_PENALTY: f64 = 15.0;
    pub const RATIO_MILD_PENALTY: f64 = 5.0;

    pub const HIGH_DAY_PENALTY: f64 = 5.0;

    pub const GREEN_MIN_SCORE: f64 = 67.0;
    pub const YELLOW_MIN_SCORE: f64 = 34.0;
}

/// Overtraining risk points
pub mod overtraining {
    pub const RATIO_SPIKE: f64 = 1.5;
    pub const RATIO_ELEVATED: f64 = 1.3;
    pub const RATIO_SPIKE_POINTS: u32 = 3;
    pub const RATIO_ELEVATED_POINTS: u32 = 2;

    pub const WEEKLY_VERY_HIGH: usize = 10;
    pub const WEEKLY_HIGH: usize = 7;
    pub const WEEKLY_VERY_HIGH_POINTS: u32 = 2;
    pub const WEEKLY_HIGH_POINTS: u32 = 1;

    /// Sessions at or above this RPE count as high-RPE
    pub const HIGH_RPE: u8 = 8;
    pub const HIGH_RPE_MANY: usize = 4;
    pub const HIGH_RPE_SEVERAL: usize = 3;
    pub const HIGH_RPE_MANY_POINTS: u32 = 2;
    pub const HIGH_RPE_SEVERAL_POINTS: u32 = 1;

    pub const SORENESS_HIGH: f64 = 3.0;
    pub const SORENESS_MODERATE: f64 = 1.0;
    pub const SORENESS_HIGH_POINTS: u32 = 2;
    pub const SORENESS_MODERATE_POINTS: u32 = 1;

    pub const HIGH_MIN_POINTS: u32 = 5;
    pub const MODERATE_MIN_POINTS: u32 = 3;
}
