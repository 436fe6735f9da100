//! YIELD PREDICTION
//!
//! Linear adjustment of a baseline yield (quintals per acre):
//!   + soil-test bonus       (soil_test_verified)
//!   + drip bonus            (irrigation_method == Drip)
//!   - damaged-seed penalty  (seed_quality == Damaged)
//!   - pest/disease penalty  (pest_observed OR disease_observed, applied once)
//!
//! The sum is never floored. A negative result is reported as `NegativeYield`
//! and the caller chooses whether to floor, warn or reject.

use crate::error::ScoringError;
use crate::profile::{FarmProfile, SeedQuality};
use crate::utils::ScoringConstants;
use serde::Serialize;

/// Signed yield deltas for a profile (q/acre)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct YieldAdjustments {
    pub soil_test: f64,
    pub irrigation: f64,
    pub seed: f64,
    pub pest_disease: f64,
}

impl YieldAdjustments {
    pub fn for_profile(profile: &FarmProfile, constants: &ScoringConstants) -> Self {
        Self {
            soil_test: if profile.soil_test_verified {
                constants.yield_soil_test_bonus
            } else {
                0.0
            },
            irrigation: if profile.irrigation_method.is_efficient() {
                constants.yield_drip_bonus
            } else {
                0.0
            },
            seed: if profile.seed_quality == SeedQuality::Damaged {
                -constants.yield_damaged_seed_penalty
            } else {
                0.0
            },
            pest_disease: if profile.has_pest_or_disease() {
                -constants.yield_pest_disease_penalty
            } else {
                0.0
            },
        }
    }

    pub fn total(&self) -> f64 {
        self.soil_test + self.irrigation + self.seed + self.pest_disease
    }
}

/// Predict yield per acre from a baseline
pub fn predict_yield(
    profile: &FarmProfile,
    base_yield_per_acre: f64,
    constants: &ScoringConstants,
) -> Result<f64, ScoringError> {
    if !base_yield_per_acre.is_finite() {
        return Err(ScoringError::invalid(
            "base_yield_per_acre",
            format!("must be a finite number, got {}", base_yield_per_acre),
        ));
    }

    let predicted = base_yield_per_acre + YieldAdjustments::for_profile(profile, constants).total();

    if predicted < 0.0 {
        return Err(ScoringError::NegativeYield { crop: None, predicted });
    }

    Ok(predicted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::IrrigationMethod;
    use approx::assert_relative_eq;

    const BASE: f64 = 20.0;

    #[test]
    fn test_neutral_profile_unchanged() {
        let constants = ScoringConstants::default();
        let predicted = predict_yield(&FarmProfile::default(), BASE, &constants).unwrap();
        assert_relative_eq!(predicted, BASE);
    }

    #[test]
    fn test_each_adjustment_in_isolation() {
        let c = ScoringConstants::default();
        let neutral = FarmProfile::default();

        let drip = FarmProfile { irrigation_method: IrrigationMethod::Drip, ..neutral.clone() };
        let damaged = FarmProfile { seed_quality: SeedQuality::Damaged, ..neutral.clone() };
        let diseased = FarmProfile { disease_observed: true, ..neutral.clone() };
        let cases = [
            (FarmProfile { soil_test_verified: true, ..neutral.clone() }, c.yield_soil_test_bonus),
            (drip, c.yield_drip_bonus),
            (damaged, -c.yield_damaged_seed_penalty),
            (FarmProfile { pest_observed: true, ..neutral.clone() }, -c.yield_pest_disease_penalty),
            (diseased, -c.yield_pest_disease_penalty),
        ];

        for (profile, delta) in cases {
            let predicted = predict_yield(&profile, BASE, &c).unwrap();
            assert_relative_eq!(predicted - BASE, delta, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_pest_and_disease_penalised_once() {
        let c = ScoringConstants::default();
        let pest_only = FarmProfile { pest_observed: true, ..FarmProfile::default() };
        let both = FarmProfile {
            pest_observed: true,
            disease_observed: true,
            ..FarmProfile::default()
        };

        assert_relative_eq!(
            predict_yield(&pest_only, BASE, &c).unwrap(),
            predict_yield(&both, BASE, &c).unwrap()
        );
    }

    #[test]
    fn test_adjustments_are_additive() {
        let c = ScoringConstants::default();
        let profile = FarmProfile {
            soil_test_verified: true,
            irrigation_method: IrrigationMethod::Drip,
            seed_quality: SeedQuality::Damaged,
            disease_observed: true,
            ..FarmProfile::default()
        };
        // 20 + 1.5 + 2.0 - 5.0 - 3.0
        assert_relative_eq!(predict_yield(&profile, BASE, &c).unwrap(), 15.5);
    }

    #[test]
    fn test_negative_yield_reported() {
        let c = ScoringConstants::default();
        let profile = FarmProfile {
            seed_quality: SeedQuality::Damaged,
            pest_observed: true,
            ..FarmProfile::default()
        };

        match predict_yield(&profile, 6.0, &c) {
            Err(ScoringError::NegativeYield { crop, predicted }) => {
                assert!(crop.is_none());
                assert_relative_eq!(predicted, -2.0);
            }
            other => panic!("expected NegativeYield, got {:?}", other),
        }

        // Exactly zero is a valid yield
        assert_relative_eq!(predict_yield(&profile, 8.0, &c).unwrap(), 0.0);
    }

    #[test]
    fn test_non_finite_base_rejected() {
        let c = ScoringConstants::default();
        assert!(matches!(
            predict_yield(&FarmProfile::default(), f64::NAN, &c),
            Err(ScoringError::InvalidInput { field: "base_yield_per_acre", .. })
        ));
    }
}
