//! Metric modules for farm scoring
//!
//! Each metric is a pure function of the profile, the catalog and the
//! scoring constants.

pub mod suitability;
pub mod yield_prediction;
pub mod sustainability;
pub mod financials;

// Re-export metric functions
pub use suitability::{
    rank_crops, score_suitability, CropEconomics, RankedCrop, SuitabilityBreakdown,
};
pub use yield_prediction::{predict_yield, YieldAdjustments};
pub use sustainability::{score_sustainability, SUSTAINABILITY_MAX, SUSTAINABILITY_MIN};
pub use financials::{aggregate_financials, CropFinancials, FinancialSummary};
