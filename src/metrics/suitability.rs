//! CROP SUITABILITY RANKING
//!
//! Scores every catalog crop against a farm profile and orders the result.
//!
//! Effective suitability = base_suitability
//!   - soil_mismatch_discount   (crop does not list the farm's soil as preferred)
//!   + drip bonus               (irrigation_method == Drip)
//!   + soil-test bonus          (soil_test_verified)
//!   - damaged-seed penalty     (seed_quality == Damaged)
//!   - pest/disease penalty     (pest_observed OR disease_observed, applied once)
//! clamped to [0, 100].
//!
//! Ordering: suitability descending, then net profit descending, then
//! catalog order (stable sort). No randomness anywhere on this path.

use crate::data::CropRecord;
use crate::error::ScoringError;
use crate::profile::{FarmProfile, SeedQuality};
use crate::utils::ScoringConstants;
use serde::Serialize;
use std::cmp::Ordering;

/// Per-crop suitability adjustments, each signed as applied
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuitabilityBreakdown {
    pub base: f64,
    pub soil_discount: f64,
    pub irrigation_bonus: f64,
    pub soil_test_bonus: f64,
    pub seed_penalty: f64,
    pub pest_disease_penalty: f64,
    /// Sum of the above, clamped to [0, 100]
    pub effective: f64,
}

impl SuitabilityBreakdown {
    /// Unclamped sum of all adjustments
    pub fn raw_total(&self) -> f64 {
        self.base
            + self.soil_discount
            + self.irrigation_bonus
            + self.soil_test_bonus
            + self.seed_penalty
            + self.pest_disease_penalty
    }
}

/// Gross revenue, cost and profit for the whole farm area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CropEconomics {
    pub gross_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

impl CropEconomics {
    pub fn for_area(crop: &CropRecord, area_acres: f64) -> Self {
        let gross_revenue = crop.market_price_per_quintal * crop.yield_per_acre * area_acres;
        let total_cost = crop.cost_per_acre * area_acres;

        Self {
            gross_revenue,
            total_cost,
            net_profit: gross_revenue - total_cost,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.gross_revenue.is_finite() && self.total_cost.is_finite() && self.net_profit.is_finite()
    }
}

/// One row of the ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedCrop {
    pub crop: CropRecord,
    pub suitability: f64,
    pub breakdown: SuitabilityBreakdown,
    pub gross_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

/// Compute the suitability breakdown for a single crop
pub fn score_suitability(
    crop: &CropRecord,
    profile: &FarmProfile,
    constants: &ScoringConstants,
) -> SuitabilityBreakdown {
    let soil_discount = if crop.prefers(profile.soil_type) {
        0.0
    } else {
        -constants.soil_mismatch_discount
    };

    let irrigation_bonus = if profile.irrigation_method.is_efficient() {
        constants.suitability_drip_bonus
    } else {
        0.0
    };

    let soil_test_bonus = if profile.soil_test_verified {
        constants.suitability_soil_test_bonus
    } else {
        0.0
    };

    let seed_penalty = if profile.seed_quality == SeedQuality::Damaged {
        -constants.suitability_damaged_seed_penalty
    } else {
        0.0
    };

    let pest_disease_penalty = if profile.has_pest_or_disease() {
        -constants.suitability_pest_disease_penalty
    } else {
        0.0
    };

    let mut breakdown = SuitabilityBreakdown {
        base: crop.base_suitability,
        soil_discount,
        irrigation_bonus,
        soil_test_bonus,
        seed_penalty,
        pest_disease_penalty,
        effective: 0.0,
    };
    breakdown.effective = breakdown.raw_total().clamp(0.0, 100.0);
    breakdown
}

/// Ordering used by the ranking: suitability desc, then net profit desc
pub fn ranking_order(a: &RankedCrop, b: &RankedCrop) -> Ordering {
    b.suitability
        .total_cmp(&a.suitability)
        .then_with(|| b.net_profit.total_cmp(&a.net_profit))
}

/// Rank every crop in the catalog for the given (validated) profile
///
/// Fails with `EmptyCatalog` rather than returning an empty ranking.
pub fn rank_crops(
    profile: &FarmProfile,
    catalog: &[CropRecord],
    constants: &ScoringConstants,
) -> Result<Vec<RankedCrop>, ScoringError> {
    if catalog.is_empty() {
        return Err(ScoringError::EmptyCatalog);
    }

    let mut ranked: Vec<RankedCrop> = catalog
        .iter()
        .map(|crop| {
            let breakdown = score_suitability(crop, profile, constants);
            let economics = CropEconomics::for_area(crop, profile.area_acres);
            if !economics.is_finite() {
                return Err(ScoringError::invalid(
                    "area_acres",
                    format!(
                        "{} acres of {} overflows the revenue calculation",
                        profile.area_acres, crop.name
                    ),
                ));
            }
            Ok(RankedCrop {
                crop: crop.clone(),
                suitability: breakdown.effective,
                breakdown,
                gross_revenue: economics.gross_revenue,
                total_cost: economics.total_cost,
                net_profit: economics.net_profit,
            })
        })
        .collect::<Result<_, _>>()?;

    // sort_by is stable: equal keys keep catalog order
    ranked.sort_by(ranking_order);

    tracing::debug!(
        "Ranked {} crops, top = {} ({:.1})",
        ranked.len(),
        ranked[0].crop.name,
        ranked[0].suitability
    );

    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Catalog, RiskLevel};
    use crate::profile::{IrrigationMethod, SoilType};
    use approx::assert_relative_eq;

    fn crop(
        name: &str,
        price: f64,
        yield_per_acre: f64,
        cost: f64,
        base: f64,
        soils: &[SoilType],
    ) -> CropRecord {
        CropRecord {
            name: name.to_string(),
            market_price_per_quintal: price,
            yield_per_acre,
            cost_per_acre: cost,
            base_suitability: base,
            pest_risk: RiskLevel::Low,
            market_risk: RiskLevel::Low,
            preferred_soils: soils.to_vec(),
        }
    }

    #[test]
    fn test_soil_membership_drives_best_crop() {
        let catalog = Catalog::builtin();
        let constants = ScoringConstants::default();

        for soil in [SoilType::Alluvial, SoilType::Clayey] {
            let profile = FarmProfile { soil_type: soil, ..FarmProfile::default() };
            let ranked = rank_crops(&profile, catalog.crops(), &constants).unwrap();
            assert_eq!(ranked[0].crop.name, "Paddy", "soil {:?}", soil);
        }

        for soil in [SoilType::Black, SoilType::Red, SoilType::Laterite, SoilType::Sandy] {
            let profile = FarmProfile { soil_type: soil, ..FarmProfile::default() };
            let ranked = rank_crops(&profile, catalog.crops(), &constants).unwrap();
            assert_eq!(ranked[0].crop.name, "Cotton", "soil {:?}", soil);
        }
    }

    #[test]
    fn test_mismatch_discount() {
        let constants = ScoringConstants::default();
        let paddy = crop("Paddy", 2250.0, 25.0, 25000.0, 94.5, &[SoilType::Alluvial]);
        let profile = FarmProfile { soil_type: SoilType::Red, ..FarmProfile::default() };

        let breakdown = score_suitability(&paddy, &profile, &constants);
        assert_relative_eq!(breakdown.soil_discount, -15.0);
        assert_relative_eq!(breakdown.effective, 79.5);
    }

    #[test]
    fn test_pest_and_disease_single_penalty() {
        let constants = ScoringConstants::default();
        let paddy = crop("Paddy", 2250.0, 25.0, 25000.0, 94.5, &[SoilType::Alluvial]);

        let pest = FarmProfile { pest_observed: true, ..FarmProfile::default() };
        let both = FarmProfile {
            pest_observed: true,
            disease_observed: true,
            ..FarmProfile::default()
        };

        let a = score_suitability(&paddy, &pest, &constants);
        let b = score_suitability(&paddy, &both, &constants);
        assert_relative_eq!(a.effective, b.effective);
        assert_relative_eq!(b.pest_disease_penalty, -8.0);
    }

    #[test]
    fn test_clamped_to_bounds() {
        let constants = ScoringConstants::default();
        let top = crop("Top", 1.0, 1.0, 0.0, 99.0, &[SoilType::Alluvial]);
        let profile = FarmProfile {
            irrigation_method: IrrigationMethod::Drip,
            soil_test_verified: true,
            ..FarmProfile::default()
        };
        let breakdown = score_suitability(&top, &profile, &constants);
        assert_relative_eq!(breakdown.raw_total(), 102.5);
        assert_relative_eq!(breakdown.effective, 100.0);

        let bottom = crop("Bottom", 1.0, 1.0, 0.0, 5.0, &[]);
        let breakdown = score_suitability(&bottom, &FarmProfile::default(), &constants);
        assert_relative_eq!(breakdown.effective, 0.0);
    }

    #[test]
    fn test_tie_broken_by_profit_then_catalog_order() {
        let constants = ScoringConstants::default();
        let soils = [SoilType::Alluvial];
        let catalog = vec![
            crop("LowProfitA", 100.0, 10.0, 500.0, 80.0, &soils),
            crop("HighProfit", 100.0, 10.0, 0.0, 80.0, &soils),
            crop("LowProfitB", 100.0, 10.0, 500.0, 80.0, &soils),
            crop("Best", 1.0, 1.0, 0.0, 90.0, &soils),
        ];

        let ranked = rank_crops(&FarmProfile::default(), &catalog, &constants).unwrap();
        let names: Vec<&str> = ranked.iter().map(|r| r.crop.name.as_str()).collect();
        assert_eq!(names, ["Best", "HighProfit", "LowProfitA", "LowProfitB"]);
    }

    #[test]
    fn test_empty_catalog_fails() {
        let result = rank_crops(&FarmProfile::default(), &[], &ScoringConstants::default());
        assert_eq!(result.unwrap_err(), ScoringError::EmptyCatalog);
    }

    #[test]
    fn test_economics() {
        let paddy = crop("Paddy", 2250.0, 25.0, 25000.0, 94.5, &[]);
        let econ = CropEconomics::for_area(&paddy, 3.0);
        assert_relative_eq!(econ.gross_revenue, 168_750.0);
        assert_relative_eq!(econ.total_cost, 75_000.0);
        assert_relative_eq!(econ.net_profit, 93_750.0);
    }

    #[test]
    fn test_overflowing_economics_rejected() {
        let constants = ScoringConstants::default();
        let catalog = vec![
            crop("Paddy", 2250.0, 25.0, 25000.0, 94.5, &[SoilType::Alluvial]),
            crop("Saffron", f64::MAX / 2.0, 25.0, 0.0, 94.5, &[SoilType::Alluvial]),
        ];

        match rank_crops(&FarmProfile::default(), &catalog, &constants) {
            Err(ScoringError::InvalidInput { field, reason }) => {
                assert_eq!(field, "area_acres");
                assert!(reason.contains("Saffron"));
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }
}
