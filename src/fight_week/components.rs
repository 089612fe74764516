//! Diet-driven weight-loss estimators
//!
//! Each estimator returns the kg of loss achievable through one mechanism
//! given the athlete's body weight and the days left before weigh-in. The
//! four are independent and are simply summed by the aggregator.

use crate::constants::{fibre, glycogen, sodium, water_loading};

/// Glycogen plus its bound water
///
/// Capped at 2.5kg. With fewer than 3 days only ~30% of the depletion is
/// realised.
pub fn glycogen_depletion(bodyweight_kg: f64, days_available: u32) -> f64 {
    let base = (bodyweight_kg * glycogen::LOSS_FRACTION_BW).min(glycogen::MAX_LOSS_KG);
    if days_available < glycogen::FULL_DEPLETION_DAYS {
        base * glycogen::PARTIAL_DEPLETION_SCALE
    } else {
        base
    }
}

/// Gut content from a low-residue diet, staged by available transit time
///
/// Exactly 7 days lands in the full stage, not the 0.7% stage. Every
/// stage is capped at 1 kg.
pub fn fibre_reduction(bodyweight_kg: f64, days_available: u32) -> f64 {
    if days_available < fibre::MIN_DAYS {
        return 0.0;
    }
    let fraction = if days_available < fibre::SHORT_STAGE_DAYS {
        fibre::SHORT_LOSS_FRACTION_BW
    } else if days_available < fibre::MEDIUM_STAGE_DAYS {
        fibre::MEDIUM_LOSS_FRACTION_BW
    } else {
        fibre::FULL_LOSS_FRACTION_BW
    };
    (bodyweight_kg * fraction).min(fibre::MAX_LOSS_KG)
}

/// Extracellular water shed by dropping sodium intake
pub fn sodium_manipulation(bodyweight_kg: f64, days_available: u32) -> f64 {
    if days_available < sodium::MIN_DAYS {
        return 0.0;
    }
    (bodyweight_kg * sodium::LOSS_FRACTION_BW).min(sodium::MAX_LOSS_KG)
}

/// Extra loss from the water-loading rebound (3 load days + restriction)
pub fn water_loading_benefit(bodyweight_kg: f64, days_available: u32) -> f64 {
    if days_available < water_loading::MIN_DAYS {
        return 0.0;
    }
    bodyweight_kg * water_loading::LOSS_FRACTION_BW
}

/// The four component losses for one athlete and timeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DietComponents {
    pub glycogen_kg: f64,
    pub fibre_kg: f64,
    pub sodium_kg: f64,
    pub water_loading_kg: f64,
}

impl DietComponents {
    pub fn estimate(bodyweight_kg: f64, days_available: u32) -> Self {
        DietComponents {
            glycogen_kg: glycogen_depletion(bodyweight_kg, days_available),
            fibre_kg: fibre_reduction(bodyweight_kg, days_available),
            sodium_kg: sodium_manipulation(bodyweight_kg, days_available),
            water_loading_kg: water_loading_benefit(bodyweight_kg, days_available),
        }
    }

    /// Sum of all four mechanisms; there are no interaction terms
    pub fn total(&self) -> f64 {
        self.glycogen_kg + self.fibre_kg + self.sodium_kg + self.water_loading_kg
    }
}
