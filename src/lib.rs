//! Farm Scorer Rust Implementation
//!
//! Crop economics and suitability scoring for a single farm profile.
//!
//! Module layout:
//! - `profile`: Farm profile input and boundary validation
//! - `data`: Immutable crop catalog
//! - `utils/`: Scoring constants and label parsing
//! - `metrics/`: Suitability ranking, yield prediction, sustainability, financials
//! - `scorer`: Coordinator producing `ScoringResult`
//! - `explanation/`: Report formatters and agronomist advice (presentation side)
//! - `calendar`: Illustrative planting heatmap (presentation side)
//!
//! Every scoring operation is a synchronous, side-effect-free function of its
//! inputs plus the read-only catalog and constants.

pub mod error;
pub mod utils;
pub mod profile;
pub mod data;
pub mod metrics;
pub mod scorer;
pub mod explanation;
pub mod calendar;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use error::ScoringError;
pub use utils::ScoringConstants;
pub use profile::{
    FarmProfile, GeoPoint, IrrigationMethod, NutrientLevel, NutrientLevels, SeedQuality, SoilType,
    WaterAvailability, WaterSource,
};
pub use data::{Catalog, CropRecord, RiskLevel};
pub use metrics::*;
pub use scorer::{FarmScorer, ScoringResult};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
