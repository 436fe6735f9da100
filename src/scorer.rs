//! Farm Scorer - Main coordinator for scoring farm profiles
//!
//! Integrates the metrics and provides the main scoring interface. Catalog and
//! constants are loaded once, wrapped in `Arc` and injected here; nothing in the
//! scoring path reads environment or global state.
//!
//! Includes both sequential and parallel (Rayon) batch implementations.

use crate::data::Catalog;
use crate::error::ScoringError;
use crate::metrics::*;
use crate::profile::FarmProfile;
use crate::utils::ScoringConstants;
use rayon::prelude::*;
use serde::Serialize;
use std::sync::Arc;

/// Farm scoring result, computed fresh per request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    /// Suitability desc, net profit desc, catalog order
    pub ranked_crops: Vec<RankedCrop>,
    /// Head of `ranked_crops`
    pub recommended_crop: RankedCrop,
    /// 0-100
    pub sustainability_score: i32,
    pub financials: FinancialSummary,
}

/// Main farm scorer
#[derive(Debug, Clone)]
pub struct FarmScorer {
    catalog: Arc<Catalog>,
    constants: Arc<ScoringConstants>,
}

impl FarmScorer {
    pub fn new(catalog: Arc<Catalog>, constants: Arc<ScoringConstants>) -> Self {
        Self { catalog, constants }
    }

    /// Scorer over the builtin catalog with default constants
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(Catalog::builtin()), Arc::new(ScoringConstants::default()))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn constants(&self) -> &ScoringConstants {
        &self.constants
    }

    /// Score a single farm profile
    ///
    /// Validation runs first; no partial computation is attempted on invalid input.
    pub fn score(&self, profile: &FarmProfile) -> Result<ScoringResult, ScoringError> {
        profile.validate()?;

        let ranked_crops = rank_crops(profile, self.catalog.crops(), &self.constants)?;
        let recommended_crop = ranked_crops
            .first()
            .cloned()
            .ok_or(ScoringError::EmptyCatalog)?;
        let financials = aggregate_financials(&ranked_crops);
        let sustainability_score = score_sustainability(profile, &self.constants);

        tracing::debug!(
            "Scored {:.2} acres of {} soil: recommended {} (suitability {:.1}), ESG {}",
            profile.area_acres,
            profile.soil_type,
            recommended_crop.crop.name,
            recommended_crop.suitability,
            sustainability_score
        );

        Ok(ScoringResult {
            ranked_crops,
            recommended_crop,
            sustainability_score,
            financials,
        })
    }

    /// Predict per-acre yield of a catalog crop for this profile
    pub fn predict_yield_for(
        &self,
        profile: &FarmProfile,
        crop_name: &str,
    ) -> Result<f64, ScoringError> {
        profile.validate()?;

        let crop = self.catalog.get(crop_name).ok_or_else(|| {
            ScoringError::invalid("crop", format!("'{}' is not in the catalog", crop_name))
        })?;

        predict_yield(profile, crop.yield_per_acre, &self.constants).map_err(|e| match e {
            ScoringError::NegativeYield { predicted, .. } => ScoringError::NegativeYield {
                crop: Some(crop.name.clone()),
                predicted,
            },
            other => other,
        })
    }

    /// Score many profiles sequentially (results in input order)
    pub fn score_batch(
        &self,
        profiles: &[FarmProfile],
    ) -> Vec<Result<ScoringResult, ScoringError>> {
        profiles.iter().map(|p| self.score(p)).collect()
    }

    /// Score many profiles in parallel (results in input order)
    ///
    /// Calls share only the read-only catalog and constants, so no locking is needed.
    pub fn score_batch_parallel(
        &self,
        profiles: &[FarmProfile],
    ) -> Vec<Result<ScoringResult, ScoringError>> {
        profiles.par_iter().map(|p| self.score(p)).collect()
    }
}
