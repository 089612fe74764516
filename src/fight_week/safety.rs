//! Safety classification for acute weight loss

use crate::constants::{safety, sauna};
use crate::models::{SafetyZone, Sex};

/// Classify dehydration by its share of body weight
///
/// Boundaries are inclusive: exactly 2% is green, exactly 4% is orange.
pub fn dehydration_safety(dehydration_kg: f64, bodyweight_kg: f64) -> SafetyZone {
    let percent = dehydration_kg / bodyweight_kg * 100.0;
    zone_for_percent(
        percent,
        safety::DEHYDRATION_GREEN_MAX_PCT,
        safety::DEHYDRATION_ORANGE_MAX_PCT,
    )
}

/// Classify the whole cut by its share of body weight
///
/// Independent of the dehydration zone; both are reported.
pub fn overall_safety(percent_bw: f64) -> SafetyZone {
    zone_for_percent(
        percent_bw,
        safety::OVERALL_GREEN_MAX_PCT,
        safety::OVERALL_ORANGE_MAX_PCT,
    )
}

fn zone_for_percent(percent: f64, green_max: f64, orange_max: f64) -> SafetyZone {
    if percent <= green_max {
        SafetyZone::Green
    } else if percent <= orange_max {
        SafetyZone::Orange
    } else {
        SafetyZone::Red
    }
}

/// Maximum safe acute weight loss (kg), stricter as time runs out
pub fn max_safe_cut(bodyweight_kg: f64, days_available: u32) -> f64 {
    let fraction = match days_available {
        d if d >= 3 => safety::AWL_FRACTION_3_DAYS,
        2 => safety::AWL_FRACTION_2_DAYS,
        _ => safety::AWL_FRACTION_1_DAY,
    };
    bodyweight_kg * fraction
}

/// Number of sauna sessions needed to sweat off the dehydration target
pub fn estimate_sauna_sessions(dehydration_kg: f64, bodyweight_kg: f64, sex: Sex) -> u32 {
    if dehydration_kg <= 0.0 {
        return 0;
    }
    let rate = match sex {
        Sex::Male => sauna::MALE_LOSS_FRACTION_PER_SESSION,
        Sex::Female => sauna::FEMALE_LOSS_FRACTION_PER_SESSION,
    };
    (dehydration_kg / (bodyweight_kg * rate)).ceil() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dehydration_zone_boundaries() {
        assert_eq!(dehydration_safety(2.0, 100.0), SafetyZone::Green);
        assert_eq!(dehydration_safety(4.0, 100.0), SafetyZone::Orange);
        assert_eq!(dehydration_safety(4.01, 100.0), SafetyZone::Red);
        assert_eq!(dehydration_safety(0.0, 80.0), SafetyZone::Green);
    }

    #[test]
    fn test_overall_zone_boundaries() {
        assert_eq!(overall_safety(5.0), SafetyZone::Green);
        assert_eq!(overall_safety(5.1), SafetyZone::Orange);
        assert_eq!(overall_safety(8.0), SafetyZone::Orange);
        assert_eq!(overall_safety(8.1), SafetyZone::Red);
    }

    #[test]
    fn test_max_safe_cut_by_days() {
        assert!((max_safe_cut(100.0, 7) - 6.7).abs() < 1e-9);
        assert!((max_safe_cut(100.0, 3) - 6.7).abs() < 1e-9);
        assert!((max_safe_cut(100.0, 2) - 5.7).abs() < 1e-9);
        assert!((max_safe_cut(100.0, 1) - 4.4).abs() < 1e-9);
        assert!((max_safe_cut(100.0, 0) - 4.4).abs() < 1e-9);
    }

    #[test]
    fn test_sauna_sessions() {
        assert_eq!(estimate_sauna_sessions(0.0, 80.0, Sex::Male), 0);
        assert_eq!(estimate_sauna_sessions(-1.0, 80.0, Sex::Male), 0);
        // 0.7% of 100kg = 0.7kg per session
        assert_eq!(estimate_sauna_sessions(1.4, 100.0, Sex::Male), 2);
        assert_eq!(estimate_sauna_sessions(1.5, 100.0, Sex::Male), 3);
        // 0.6% of 100kg = 0.6kg per session
        assert_eq!(estimate_sauna_sessions(1.5, 100.0, Sex::Female), 3);
        assert_eq!(estimate_sauna_sessions(1.9, 100.0, Sex::Female), 4);
    }
}
