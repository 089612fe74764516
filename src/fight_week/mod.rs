//! Fight-week weight-cut projection
//!
//! Turns current weight, weigh-in target and days remaining into a loss
//! breakdown (glycogen, gut content, sodium, water loading, and whatever is
//! left for acute dehydration), two safety classifications and a daily
//! tapering protocol.
//!
//! The engine performs no validation: impossible inputs produce defined but
//! meaningless output (a negative cut clamps to zero, a zero-day plan still
//! has a weigh-in row). Callers that want to reject bad input up front can
//! use [`ProjectionInput::validate`].

use crate::error::{FightCampError, Result};
use crate::models::{ProjectionInput, ProjectionResult, SafetyZone};
use tracing::debug;

pub mod components;
pub mod safety;
pub mod timeline;

use components::DietComponents;

/// Longest plan the protocol is designed for
pub const MAX_PLAN_DAYS: u32 = 14;

/// How the required cut splits between diet mechanisms and dehydration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LossBreakdown {
    pub components: DietComponents,
    pub diet_total_kg: f64,
    /// max(0, total_to_cut - diet_total)
    pub dehydration_needed_kg: f64,
}

impl LossBreakdown {
    pub fn from_input(input: &ProjectionInput) -> Self {
        let components =
            DietComponents::estimate(input.current_weight_kg, input.days_until_weigh_in);
        let diet_total_kg = components.total();
        let dehydration_needed_kg = (total_to_cut(input) - diet_total_kg).max(0.0);

        LossBreakdown {
            components,
            diet_total_kg,
            dehydration_needed_kg,
        }
    }
}

fn total_to_cut(input: &ProjectionInput) -> f64 {
    (input.current_weight_kg - input.target_weight_kg).max(0.0)
}

/// Round half away from zero to `decimals` places
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Build the complete fight-week plan for one athlete
pub fn compute_fight_week_plan(input: &ProjectionInput) -> ProjectionResult {
    let bodyweight = input.current_weight_kg;
    let days = input.days_until_weigh_in;

    let total_to_cut_kg = total_to_cut(input);
    let percent_bw = total_to_cut_kg / bodyweight * 100.0;

    let breakdown = LossBreakdown::from_input(input);
    let dehydration = breakdown.dehydration_needed_kg;
    let dehydration_percent_bw = dehydration / bodyweight * 100.0;

    let dehydration_safety = if dehydration > 0.0 {
        safety::dehydration_safety(dehydration, bodyweight)
    } else {
        SafetyZone::Green
    };
    let overall_safety = safety::overall_safety(percent_bw);
    let max_safe_awl_kg = safety::max_safe_cut(bodyweight, days);
    let sauna_sessions = safety::estimate_sauna_sessions(dehydration, bodyweight, input.sex);

    debug!(
        total_to_cut_kg,
        diet_total_kg = breakdown.diet_total_kg,
        dehydration_kg = dehydration,
        %dehydration_safety,
        %overall_safety,
        "Computed fight-week loss breakdown"
    );

    let timeline = timeline::build_timeline(input, &breakdown);
    let components = breakdown.components;

    ProjectionResult {
        total_to_cut_kg: round_to(total_to_cut_kg, 2),
        glycogen_loss_kg: round_to(components.glycogen_kg, 2),
        fibre_loss_kg: round_to(components.fibre_kg, 2),
        sodium_loss_kg: round_to(components.sodium_kg, 2),
        water_loading_loss_kg: round_to(components.water_loading_kg, 2),
        diet_total_kg: round_to(breakdown.diet_total_kg, 2),
        dehydration_needed_kg: round_to(dehydration, 2),
        dehydration_percent_bw: round_to(dehydration_percent_bw, 1),
        dehydration_safety,
        overall_safety,
        max_safe_awl_kg: round_to(max_safe_awl_kg, 1),
        percent_bw: round_to(percent_bw, 1),
        sauna_sessions,
        timeline,
    }
}

impl ProjectionInput {
    /// Form-level checks for callers; the engine itself never calls this
    pub fn validate(&self) -> Result<()> {
        if !(self.current_weight_kg.is_finite() && self.current_weight_kg > 0.0) {
            return Err(FightCampError::Validation(format!(
                "current weight must be positive, got {}kg",
                self.current_weight_kg
            )));
        }
        if !(self.target_weight_kg.is_finite() && self.target_weight_kg > 0.0) {
            return Err(FightCampError::Validation(format!(
                "target weight must be positive, got {}kg",
                self.target_weight_kg
            )));
        }
        if self.target_weight_kg > self.current_weight_kg {
            return Err(FightCampError::Validation(format!(
                "target weight {}kg is above current weight {}kg",
                self.target_weight_kg, self.current_weight_kg
            )));
        }
        if !(1..=MAX_PLAN_DAYS).contains(&self.days_until_weigh_in) {
            return Err(FightCampError::Validation(format!(
                "days until weigh-in must be 1-{}, got {}",
                MAX_PLAN_DAYS, self.days_until_weigh_in
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sex;

    fn input(current: f64, target: f64, days: u32, sex: Sex) -> ProjectionInput {
        ProjectionInput {
            current_weight_kg: current,
            target_weight_kg: target,
            days_until_weigh_in: days,
            sex,
        }
    }

    #[test]
    fn test_seven_day_plan_breakdown() {
        let result = compute_fight_week_plan(&input(80.0, 70.3, 7, Sex::Male));

        assert_eq!(result.total_to_cut_kg, 9.7);
        assert_eq!(result.glycogen_loss_kg, 1.6);
        assert_eq!(result.fibre_loss_kg, 0.8);
        assert_eq!(result.sodium_loss_kg, 0.56);
        assert_eq!(result.water_loading_loss_kg, 0.64);
        assert_eq!(result.diet_total_kg, 3.6);
        assert_eq!(result.dehydration_needed_kg, 6.1);
        assert_eq!(result.dehydration_percent_bw, 7.6);
        assert_eq!(result.dehydration_safety, SafetyZone::Red);
        assert_eq!(result.percent_bw, 12.1);
        assert_eq!(result.overall_safety, SafetyZone::Red);
        assert_eq!(result.max_safe_awl_kg, 5.4);
        // 6.1 / (80 * 0.007) = 10.9
        assert_eq!(result.sauna_sessions, 11);
        assert_eq!(result.timeline.len(), 7);
        assert_eq!(result.timeline.last().unwrap().projected_weight_kg, 70.3);
    }

    #[test]
    fn test_one_day_plan_is_all_dehydration() {
        let result = compute_fight_week_plan(&input(70.0, 68.0, 1, Sex::Female));

        assert_eq!(result.glycogen_loss_kg, 0.42);
        assert_eq!(result.fibre_loss_kg, 0.0);
        assert_eq!(result.sodium_loss_kg, 0.0);
        assert_eq!(result.water_loading_loss_kg, 0.0);
        assert_eq!(result.dehydration_needed_kg, 1.58);
        assert_eq!(result.max_safe_awl_kg, 3.1);
        assert_eq!(result.timeline.len(), 1);
        assert_eq!(result.timeline[0].projected_weight_kg, 68.0);
    }

    #[test]
    fn test_easy_cut_needs_no_dehydration() {
        let result = compute_fight_week_plan(&input(80.0, 78.0, 7, Sex::Male));

        assert_eq!(result.dehydration_needed_kg, 0.0);
        assert_eq!(result.dehydration_safety, SafetyZone::Green);
        assert_eq!(result.overall_safety, SafetyZone::Green);
        assert_eq!(result.sauna_sessions, 0);
    }

    #[test]
    fn test_target_above_current_clamps_to_zero() {
        let result = compute_fight_week_plan(&input(70.0, 72.0, 5, Sex::Male));

        assert_eq!(result.total_to_cut_kg, 0.0);
        assert_eq!(result.dehydration_needed_kg, 0.0);
        assert!(result.timeline.iter().all(|d| d.projected_weight_kg == 72.0));
    }

    #[test]
    fn test_identical_inputs_give_identical_plans() {
        let input = input(92.4, 84.0, 9, Sex::Female);
        assert_eq!(compute_fight_week_plan(&input), compute_fight_week_plan(&input));
    }

    #[test]
    fn test_validate() {
        assert!(input(80.0, 75.0, 7, Sex::Male).validate().is_ok());
        assert!(input(0.0, 75.0, 7, Sex::Male).validate().is_err());
        assert!(input(80.0, 85.0, 7, Sex::Male).validate().is_err());
        assert!(input(80.0, 75.0, 0, Sex::Male).validate().is_err());
        assert!(input(80.0, 75.0, 15, Sex::Male).validate().is_err());
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.234, 2), 1.23);
        assert_eq!(round_to(7.625, 1), 7.6);
        assert_eq!(round_to(-0.04, 1), -0.0);
    }
}
