//! Scoring constants
//!
//! Every tunable magnitude used by the metrics lives here, with one canonical
//! default set. A JSON file may override any subset of keys; missing keys keep
//! their defaults.
//!
//! Magnitudes are stored as non-negative numbers. The metric that consumes a
//! constant decides whether it is added or subtracted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Adjustment constants for suitability, yield and sustainability scoring
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConstants {
    // Suitability (score points, 0-100 scale)
    pub soil_mismatch_discount: f64,
    pub suitability_drip_bonus: f64,
    pub suitability_soil_test_bonus: f64,
    pub suitability_damaged_seed_penalty: f64,
    pub suitability_pest_disease_penalty: f64,

    // Yield (quintals per acre)
    pub yield_soil_test_bonus: f64,
    pub yield_drip_bonus: f64,
    pub yield_damaged_seed_penalty: f64,
    pub yield_pest_disease_penalty: f64,

    // Sustainability (integer points, clamped to 0-100 after summing)
    pub sustainability_baseline: i32,
    pub sustainability_organic_bonus: i32,
    pub sustainability_drip_bonus: i32,
    pub sustainability_chemical_penalty: i32,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            soil_mismatch_discount: 15.0,
            suitability_drip_bonus: 2.0,
            suitability_soil_test_bonus: 1.5,
            suitability_damaged_seed_penalty: 10.0,
            suitability_pest_disease_penalty: 8.0,

            yield_soil_test_bonus: 1.5,
            yield_drip_bonus: 2.0,
            yield_damaged_seed_penalty: 5.0,
            yield_pest_disease_penalty: 3.0,

            sustainability_baseline: 60,
            sustainability_organic_bonus: 20,
            sustainability_drip_bonus: 15,
            sustainability_chemical_penalty: 15,
        }
    }
}

impl ScoringConstants {
    /// Load constants from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring constants file: {:?}", path))?;

        Self::from_json(&contents)
            .with_context(|| format!("Invalid scoring constants in {:?}", path))
    }

    /// Parse constants from a JSON string and validate them
    pub fn from_json(json: &str) -> Result<Self> {
        let constants: ScoringConstants =
            serde_json::from_str(json).with_context(|| "Failed to parse scoring constants JSON")?;
        constants.validate()?;
        Ok(constants)
    }

    /// Reject negative or non-finite magnitudes
    pub fn validate(&self) -> Result<()> {
        let real_fields = [
            ("soil_mismatch_discount", self.soil_mismatch_discount),
            ("suitability_drip_bonus", self.suitability_drip_bonus),
            ("suitability_soil_test_bonus", self.suitability_soil_test_bonus),
            ("suitability_damaged_seed_penalty", self.suitability_damaged_seed_penalty),
            ("suitability_pest_disease_penalty", self.suitability_pest_disease_penalty),
            ("yield_soil_test_bonus", self.yield_soil_test_bonus),
            ("yield_drip_bonus", self.yield_drip_bonus),
            ("yield_damaged_seed_penalty", self.yield_damaged_seed_penalty),
            ("yield_pest_disease_penalty", self.yield_pest_disease_penalty),
        ];
        for (name, value) in real_fields {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Constant '{}' must be a non-negative number, got {}", name, value);
            }
        }

        let integer_fields = [
            ("sustainability_organic_bonus", self.sustainability_organic_bonus),
            ("sustainability_drip_bonus", self.sustainability_drip_bonus),
            ("sustainability_chemical_penalty", self.sustainability_chemical_penalty),
        ];
        for (name, value) in integer_fields {
            if value < 0 {
                anyhow::bail!("Constant '{}' must be non-negative, got {}", name, value);
            }
        }

        // Baseline may sit anywhere; the final score is clamped
        Ok(())
    }
}
