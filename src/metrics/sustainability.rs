//! SUSTAINABILITY (ESG) SCORE
//!
//! baseline + organic bonus + drip bonus - chemical penalty, clamped to [0, 100]
//! inclusive. Independent bonuses can push the sum past either bound, so the
//! clamp is mandatory.

use crate::profile::FarmProfile;
use crate::utils::ScoringConstants;

pub const SUSTAINABILITY_MIN: i32 = 0;
pub const SUSTAINABILITY_MAX: i32 = 100;

/// Unclamped sum of baseline and practice adjustments
///
/// Summed in `i64`: any combination of `i32` constants fits without overflow.
pub fn raw_sustainability(profile: &FarmProfile, constants: &ScoringConstants) -> i64 {
    let mut score = i64::from(constants.sustainability_baseline);

    if profile.uses_organic_manure {
        score += i64::from(constants.sustainability_organic_bonus);
    }
    if profile.irrigation_method.is_efficient() {
        score += i64::from(constants.sustainability_drip_bonus);
    }
    if profile.uses_chemical_fertilizer {
        score -= i64::from(constants.sustainability_chemical_penalty);
    }

    score
}

/// Sustainability score in [0, 100]
pub fn score_sustainability(profile: &FarmProfile, constants: &ScoringConstants) -> i32 {
    let clamped = raw_sustainability(profile, constants)
        .clamp(i64::from(SUSTAINABILITY_MIN), i64::from(SUSTAINABILITY_MAX));
    // In [0, 100] after the clamp
    clamped as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::IrrigationMethod;

    fn constants(baseline: i32) -> ScoringConstants {
        ScoringConstants {
            sustainability_baseline: baseline,
            sustainability_organic_bonus: 20,
            sustainability_drip_bonus: 15,
            sustainability_chemical_penalty: 15,
            ..ScoringConstants::default()
        }
    }

    fn all_bonuses() -> FarmProfile {
        FarmProfile {
            uses_organic_manure: true,
            irrigation_method: IrrigationMethod::Drip,
            ..FarmProfile::default()
        }
    }

    fn chemical_only() -> FarmProfile {
        FarmProfile { uses_chemical_fertilizer: true, ..FarmProfile::default() }
    }

    #[test]
    fn test_default_baseline() {
        let c = ScoringConstants::default();
        assert_eq!(score_sustainability(&FarmProfile::default(), &c), 60);
        assert_eq!(score_sustainability(&all_bonuses(), &c), 95);
        assert_eq!(score_sustainability(&chemical_only(), &c), 45);
    }

    #[test]
    fn test_clamp_above_max() {
        // 70 + 20 + 15 = 105
        let c = constants(70);
        assert_eq!(raw_sustainability(&all_bonuses(), &c), 105);
        assert_eq!(score_sustainability(&all_bonuses(), &c), 100);
    }

    #[test]
    fn test_clamp_below_min() {
        // 5 - 15 = -10
        let c = constants(5);
        assert_eq!(raw_sustainability(&chemical_only(), &c), -10);
        assert_eq!(score_sustainability(&chemical_only(), &c), 0);
    }

    #[test]
    fn test_inclusive_boundaries_unchanged() {
        // 65 + 20 + 15 = 100
        let c = constants(65);
        assert_eq!(raw_sustainability(&all_bonuses(), &c), 100);
        assert_eq!(score_sustainability(&all_bonuses(), &c), 100);

        // 15 - 15 = 0
        let c = constants(15);
        assert_eq!(raw_sustainability(&chemical_only(), &c), 0);
        assert_eq!(score_sustainability(&chemical_only(), &c), 0);
    }

    #[test]
    fn test_extreme_constants_do_not_overflow() {
        let c = constants(i32::MAX);
        assert_eq!(raw_sustainability(&all_bonuses(), &c), i64::from(i32::MAX) + 35);
        assert_eq!(score_sustainability(&all_bonuses(), &c), 100);

        let c = ScoringConstants {
            sustainability_baseline: i32::MIN,
            sustainability_chemical_penalty: i32::MAX,
            ..ScoringConstants::default()
        };
        assert_eq!(score_sustainability(&chemical_only(), &c), 0);

        let json = r#"{ "sustainability_baseline": 2147483647 }"#;
        let c = ScoringConstants::from_json(json).unwrap();
        assert_eq!(score_sustainability(&all_bonuses(), &c), 100);
    }
}
