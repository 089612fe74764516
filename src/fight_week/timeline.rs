//! Day-by-day fight-week protocol
//!
//! Nutrient and fluid targets are expressed as ordered rule tables: for each
//! day the first rule whose predicate matches supplies the value. Every
//! table ends with a catch-all rule.

use super::safety::estimate_sauna_sessions;
use super::{round_to, LossBreakdown};
use crate::constants::{fibre, glycogen, sodium, taper, water_loading};
use crate::models::{DayProjection, ProjectionInput};

/// Everything a rule may look at when deciding a day's value
#[derive(Debug, Clone, Copy)]
pub struct DayContext {
    /// 0-based position in the timeline
    pub index: u32,
    /// Length of the timeline
    pub days: u32,
    /// Days remaining until weigh-in (0 on weigh-in day)
    pub days_out: u32,
    pub bodyweight_kg: f64,
    /// Water-loading protocol is in effect
    pub water_loading: bool,
    /// Some of the cut has to come from acute dehydration
    pub dehydration: bool,
}

impl DayContext {
    pub fn new(index: u32, days: u32, bodyweight_kg: f64, breakdown: &LossBreakdown) -> Self {
        DayContext {
            index,
            days,
            days_out: days - 1 - index,
            bodyweight_kg,
            water_loading: days >= water_loading::MIN_DAYS
                && breakdown.components.water_loading_kg > 0.0,
            dehydration: breakdown.dehydration_needed_kg > 0.0,
        }
    }

    pub fn is_weigh_in(&self) -> bool {
        self.days_out == 0
    }

    /// The last day before weigh-in, when dehydration happens
    pub fn is_final_cut_day(&self) -> bool {
        self.days_out == 1
    }

    fn per_kg(&self, amount: f64) -> f64 {
        (self.bodyweight_kg * amount).round()
    }

    /// floor(days * share), used by the fibre and sodium ladders
    fn share_of_days(&self, share: f64) -> u32 {
        (self.days as f64 * share).floor() as u32
    }
}

/// One `(predicate, value)` row of a taper table
pub struct TaperRule {
    pub when: fn(&DayContext) -> bool,
    pub value: fn(&DayContext) -> f64,
}

/// Evaluate a taper table top to bottom, returning the first match
pub fn select(rules: &[TaperRule], ctx: &DayContext) -> f64 {
    rules
        .iter()
        .find(|rule| (rule.when)(ctx))
        .map(|rule| (rule.value)(ctx))
        .unwrap_or(0.0)
}

fn always(_: &DayContext) -> bool {
    true
}

/// 2g/kg -> 1g/kg -> <50g, or a two-step taper for 1-2 day plans
pub const CARB_RULES: &[TaperRule] = &[
    TaperRule {
        when: |c| c.is_weigh_in(),
        value: |_| 0.0,
    },
    TaperRule {
        when: |c| c.days <= taper::SHORT_NOTICE_MAX_DAYS && c.index == 0,
        value: |c| c.per_kg(taper::CARB_MID_G_PER_KG),
    },
    TaperRule {
        when: |c| c.days <= taper::SHORT_NOTICE_MAX_DAYS,
        value: |_| taper::CARB_SHORT_NOTICE_G,
    },
    TaperRule {
        when: |c| c.days_out >= c.days - 1,
        value: |c| c.per_kg(taper::CARB_START_G_PER_KG),
    },
    TaperRule {
        when: |c| c.days_out >= c.days / 2,
        value: |c| c.per_kg(taper::CARB_MID_G_PER_KG),
    },
    TaperRule {
        when: always,
        value: |_| taper::CARB_FINAL_G,
    },
];

/// 15g -> 8g -> nothing on weigh-in day
pub const FIBRE_RULES: &[TaperRule] = &[
    TaperRule {
        when: |c| c.days_out >= c.share_of_days(taper::FIBRE_EARLY_SHARE),
        value: |_| taper::FIBRE_EARLY_G,
    },
    TaperRule {
        when: |c| c.days_out >= 1,
        value: |_| taper::FIBRE_LATE_G,
    },
    TaperRule {
        when: always,
        value: |_| taper::FIBRE_WEIGH_IN_G,
    },
];

/// 2500mg -> 2000mg -> 1500mg on weigh-in day
pub const SODIUM_RULES: &[TaperRule] = &[
    TaperRule {
        when: |c| c.days_out >= c.share_of_days(taper::SODIUM_EARLY_SHARE),
        value: |_| taper::SODIUM_EARLY_MG,
    },
    TaperRule {
        when: |c| c.days_out >= 1,
        value: |_| taper::SODIUM_LATE_MG,
    },
    TaperRule {
        when: always,
        value: |_| taper::SODIUM_WEIGH_IN_MG,
    },
];

/// Water loading (100ml/kg for 3 days then 15ml/kg) or normal-then-restrict
pub const FLUID_RULES: &[TaperRule] = &[
    TaperRule {
        when: |c| c.water_loading && c.index < water_loading::LOAD_DAYS,
        value: |c| c.per_kg(taper::FLUID_LOAD_ML_PER_KG),
    },
    TaperRule {
        when: |c| c.water_loading && c.days_out >= 1,
        value: |c| c.per_kg(taper::FLUID_RESTRICT_ML_PER_KG),
    },
    TaperRule {
        when: |c| c.water_loading,
        value: |c| c.per_kg(taper::FLUID_WEIGH_IN_ML_PER_KG),
    },
    TaperRule {
        when: |c| c.days_out >= 2,
        value: |c| c.per_kg(taper::FLUID_NORMAL_ML_PER_KG),
    },
    TaperRule {
        when: |c| c.days_out == 1,
        value: |c| c.per_kg(taper::FLUID_RESTRICT_ML_PER_KG),
    },
    TaperRule {
        when: always,
        value: |c| c.per_kg(taper::FLUID_WEIGH_IN_ML_PER_KG),
    },
];

/// Text of a protocol note
pub enum ActionNote {
    Fixed(&'static str),
    /// Sauna count depends on the dehydration target and athlete
    SaunaSessions,
}

/// A protocol note emitted on every day matching `when`
pub struct ActionRule {
    pub when: fn(&DayContext) -> bool,
    pub note: ActionNote,
}

/// Protocol start gates mirror the estimator gates so a note is only shown
/// for mechanisms that contribute to the plan.
pub const ACTION_RULES: &[ActionRule] = &[
    ActionRule {
        when: |c| c.index == 0 && c.days >= glycogen::FULL_DEPLETION_DAYS,
        note: ActionNote::Fixed("Begin low-carb protocol (<50g/day target)"),
    },
    ActionRule {
        when: |c| c.index == 0 && c.days >= fibre::SHORT_STAGE_DAYS,
        note: ActionNote::Fixed("Start fibre reduction (<10g/day)"),
    },
    ActionRule {
        when: |c| c.index == 0 && c.days >= water_loading::MIN_DAYS,
        note: ActionNote::Fixed("Begin water loading (100ml/kg/day)"),
    },
    ActionRule {
        when: |c| c.index == 0 && c.days >= sodium::MIN_DAYS,
        note: ActionNote::Fixed("Reduce sodium to <2300mg/day"),
    },
    ActionRule {
        when: |c| c.index == water_loading::LOAD_DAYS - 1 && c.days >= water_loading::MIN_DAYS,
        note: ActionNote::Fixed("Last day of water loading"),
    },
    ActionRule {
        when: |c| c.index == water_loading::LOAD_DAYS && c.days >= water_loading::MIN_DAYS + 1,
        note: ActionNote::Fixed("Switch to water restriction (15ml/kg)"),
    },
    ActionRule {
        when: |c| c.is_final_cut_day() && c.dehydration,
        note: ActionNote::SaunaSessions,
    },
    ActionRule {
        when: |c| c.is_final_cut_day() && c.dehydration,
        note: ActionNote::Fixed("Monitor for dizziness — have electrolytes ready"),
    },
    ActionRule {
        when: |c| c.is_weigh_in(),
        note: ActionNote::Fixed("Weigh-in day — minimal food/fluid"),
    },
    ActionRule {
        when: |c| c.is_weigh_in() && c.dehydration,
        note: ActionNote::Fixed("Post weigh-in: begin aggressive rehydration immediately"),
    },
    ActionRule {
        when: |c| c.is_weigh_in() && c.dehydration,
        note: ActionNote::Fixed("ORS with 50-90 mmol/L sodium, carbs 8-12 g/kg"),
    },
];

fn day_label(days_out: u32) -> String {
    match days_out {
        0 => "Weigh-In Day".to_string(),
        1 => "1 Day Out".to_string(),
        n => format!("{} Days Out", n),
    }
}

fn day_actions(ctx: &DayContext, input: &ProjectionInput, breakdown: &LossBreakdown) -> Vec<String> {
    ACTION_RULES
        .iter()
        .filter(|rule| (rule.when)(ctx))
        .map(|rule| match rule.note {
            ActionNote::Fixed(text) => text.to_string(),
            ActionNote::SaunaSessions => {
                let sessions = estimate_sauna_sessions(
                    breakdown.dehydration_needed_kg,
                    input.current_weight_kg,
                    input.sex,
                );
                format!(
                    "Dehydration protocol: ~{} sauna sessions (4×10min at 90°C)",
                    sessions
                )
            }
        })
        .collect()
}

/// Projected scale weight at the end of a day
///
/// Diet losses accrue linearly over the diet days, dehydration lands in
/// full on the last day before weigh-in, and the weigh-in day is exactly the
/// target. Never below target.
fn projected_weight(ctx: &DayContext, input: &ProjectionInput, breakdown: &LossBreakdown) -> f64 {
    if ctx.is_weigh_in() {
        return input.target_weight_kg;
    }

    let diet_days = ctx.days.saturating_sub(u32::from(ctx.dehydration)).max(1);
    let fraction = ((ctx.index + 1) as f64 / diet_days as f64).min(1.0);
    let diet_loss = breakdown.diet_total_kg * fraction;
    let dehydration_loss = if ctx.is_final_cut_day() && ctx.dehydration {
        breakdown.dehydration_needed_kg
    } else {
        0.0
    };

    round_to(input.current_weight_kg - diet_loss - dehydration_loss, 1).max(input.target_weight_kg)
}

/// Expand a loss breakdown into one row per day, weigh-in last
///
/// A zero-day input still yields a single weigh-in row.
pub fn build_timeline(input: &ProjectionInput, breakdown: &LossBreakdown) -> Vec<DayProjection> {
    let days = input.days_until_weigh_in.max(1);

    (0..days)
        .map(|index| {
            let ctx = DayContext::new(index, days, input.current_weight_kg, breakdown);
            DayProjection {
                day: -(ctx.days_out as i32),
                label: day_label(ctx.days_out),
                projected_weight_kg: projected_weight(&ctx, input, breakdown),
                carb_target_g: select(CARB_RULES, &ctx),
                fibre_target_g: select(FIBRE_RULES, &ctx),
                sodium_target_mg: select(SODIUM_RULES, &ctx),
                fluid_target_ml: select(FLUID_RULES, &ctx),
                actions: day_actions(&ctx, input, breakdown),
            }
        })
        .collect()
}
