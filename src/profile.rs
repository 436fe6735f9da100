//! Farm profile definition and boundary validation
//!
//! A `FarmProfile` is the per-request input to the engine. Enumerated fields
//! are tagged enums parsed from labels (see `utils::labels`), so out-of-domain
//! values are rejected while deserialising. Numeric ranges are checked by
//! `FarmProfile::validate` before any scoring runs.

use crate::error::ScoringError;
use crate::utils::labels::{labelled_string_impls, Labelled};
use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerated domains
// ============================================================================

/// Soil classes used in Indian soil surveys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SoilType {
    Alluvial,
    Black,
    Red,
    Laterite,
    Clayey,
    Sandy,
    Loamy,
}

impl Labelled for SoilType {
    const FIELD: &'static str = "soil_type";

    fn all() -> &'static [Self] {
        &[
            SoilType::Alluvial,
            SoilType::Black,
            SoilType::Red,
            SoilType::Laterite,
            SoilType::Clayey,
            SoilType::Sandy,
            SoilType::Loamy,
        ]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            SoilType::Alluvial => &["Alluvial"],
            SoilType::Black => &["Black", "Regur", "Black Cotton"],
            SoilType::Red => &["Red", "Red and Yellow"],
            SoilType::Laterite => &["Laterite", "Lateritic"],
            // "Clay" and "Clayey" name the same class across the dashboards
            SoilType::Clayey => &["Clayey", "Clay"],
            SoilType::Sandy => &["Sandy", "Sand", "Desert"],
            SoilType::Loamy => &["Loamy", "Loam"],
        }
    }
}

labelled_string_impls!(SoilType);

/// How much water the farm can draw on through the season
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WaterAvailability {
    Dry,
    Low,
    Full,
}

impl Labelled for WaterAvailability {
    const FIELD: &'static str = "water_availability";

    fn all() -> &'static [Self] {
        &[WaterAvailability::Dry, WaterAvailability::Low, WaterAvailability::Full]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            WaterAvailability::Dry => &["Dry", "Rainfed", "None"],
            WaterAvailability::Low => &["Low", "Limited", "Partial"],
            WaterAvailability::Full => &["Full", "Assured", "Irrigated"],
        }
    }
}

labelled_string_impls!(WaterAvailability);

/// Where irrigation water comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WaterSource {
    Borewell,
    Canal,
    Rainwater,
}

impl Labelled for WaterSource {
    const FIELD: &'static str = "water_source";

    fn all() -> &'static [Self] {
        &[WaterSource::Borewell, WaterSource::Canal, WaterSource::Rainwater]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            WaterSource::Borewell => &["Borewell", "Tubewell", "Well"],
            WaterSource::Canal => &["Canal", "River"],
            WaterSource::Rainwater => &["Rainwater", "Rain", "Rainfed"],
        }
    }
}

labelled_string_impls!(WaterSource);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum IrrigationMethod {
    Drip,
    Sprinkler,
    Flood,
    Manual,
}

impl IrrigationMethod {
    /// Only drip irrigation earns the efficiency bonuses
    pub fn is_efficient(&self) -> bool {
        matches!(self, IrrigationMethod::Drip)
    }
}

impl Labelled for IrrigationMethod {
    const FIELD: &'static str = "irrigation_method";

    fn all() -> &'static [Self] {
        &[
            IrrigationMethod::Drip,
            IrrigationMethod::Sprinkler,
            IrrigationMethod::Flood,
            IrrigationMethod::Manual,
        ]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            IrrigationMethod::Drip => &["Drip", "Drip Irrigation", "Micro Irrigation"],
            IrrigationMethod::Sprinkler => &["Sprinkler"],
            IrrigationMethod::Flood => &["Flood", "Furrow"],
            IrrigationMethod::Manual => &["Manual", "Hand", "Bucket"],
        }
    }
}

labelled_string_impls!(IrrigationMethod);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SeedQuality {
    CertifiedElite,
    Standard,
    Damaged,
}

impl Labelled for SeedQuality {
    const FIELD: &'static str = "seed_quality";

    fn all() -> &'static [Self] {
        &[SeedQuality::CertifiedElite, SeedQuality::Standard, SeedQuality::Damaged]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            SeedQuality::CertifiedElite => {
                &["Certified/Elite", "CertifiedElite", "Certified", "Elite"]
            }
            SeedQuality::Standard => &["Standard", "Normal", "Farm Saved"],
            SeedQuality::Damaged => &["Damaged", "Poor"],
        }
    }
}

labelled_string_impls!(SeedQuality);

/// Ordinal soil-test nutrient reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NutrientLevel {
    Low,
    Medium,
    High,
}

impl Labelled for NutrientLevel {
    const FIELD: &'static str = "nutrient_levels";

    fn all() -> &'static [Self] {
        &[NutrientLevel::Low, NutrientLevel::Medium, NutrientLevel::High]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            NutrientLevel::Low => &["Low", "Deficient"],
            NutrientLevel::Medium => &["Medium", "Moderate", "Adequate"],
            NutrientLevel::High => &["High", "Sufficient"],
        }
    }
}

labelled_string_impls!(NutrientLevel);

// ============================================================================
// Profile
// ============================================================================

/// Nitrogen / phosphorus / potassium readings from a soil test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutrientLevels {
    pub nitrogen: NutrientLevel,
    pub phosphorus: NutrientLevel,
    pub potassium: NutrientLevel,
}

/// Farm location in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

/// Largest accepted farm area. Keeps per-farm economics finite for any
/// catalog price.
pub const MAX_AREA_ACRES: f64 = 1_000_000.0;

/// Per-request farm description supplied by the caller.
///
/// Core agronomic fields are required; only the optional descriptors and the
/// practice flags may be omitted. Unknown keys are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FarmProfile {
    /// Land record identifier (patta / chitta / survey number), display only
    #[serde(default)]
    pub survey_number: Option<String>,

    #[serde(default)]
    pub location: Option<GeoPoint>,

    /// Cultivated area (acres)
    pub area_acres: f64,

    pub soil_type: SoilType,

    /// Soil pH (0-14)
    pub soil_ph: f64,

    #[serde(default)]
    pub nutrient_levels: Option<NutrientLevels>,

    pub water_availability: WaterAvailability,

    #[serde(default)]
    pub water_source: Option<WaterSource>,

    pub irrigation_method: IrrigationMethod,

    /// Soil-health card from a lab test is on file
    #[serde(default)]
    pub soil_test_verified: bool,

    #[serde(default)]
    pub uses_organic_manure: bool,
    #[serde(default)]
    pub uses_chemical_fertilizer: bool,

    pub seed_quality: SeedQuality,

    #[serde(default)]
    pub pest_observed: bool,
    #[serde(default)]
    pub disease_observed: bool,
}

impl Default for FarmProfile {
    /// Neutral profile: no bonus or penalty applies to any metric
    fn default() -> Self {
        Self {
            survey_number: None,
            location: None,
            area_acres: 1.0,
            soil_type: SoilType::Alluvial,
            soil_ph: 7.0,
            nutrient_levels: None,
            water_availability: WaterAvailability::Full,
            water_source: None,
            irrigation_method: IrrigationMethod::Manual,
            soil_test_verified: false,
            uses_organic_manure: false,
            uses_chemical_fertilizer: false,
            seed_quality: SeedQuality::Standard,
            pest_observed: false,
            disease_observed: false,
        }
    }
}

impl FarmProfile {
    /// Check numeric ranges. Enumerated fields are already in-domain by type.
    pub fn validate(&self) -> Result<(), ScoringError> {
        if !self.area_acres.is_finite() || self.area_acres <= 0.0 {
            return Err(ScoringError::invalid(
                "area_acres",
                format!("must be a positive number of acres, got {}", self.area_acres),
            ));
        }
        if self.area_acres > MAX_AREA_ACRES {
            return Err(ScoringError::invalid(
                "area_acres",
                format!("must not exceed {} acres, got {}", MAX_AREA_ACRES, self.area_acres),
            ));
        }

        if !self.soil_ph.is_finite() || !(0.0..=14.0).contains(&self.soil_ph) {
            return Err(ScoringError::invalid(
                "soil_ph",
                format!("must be within [0, 14], got {}", self.soil_ph),
            ));
        }

        if let Some(point) = &self.location {
            if !point.latitude.is_finite() || !(-90.0..=90.0).contains(&point.latitude) {
                return Err(ScoringError::invalid(
                    "location",
                    format!("latitude must be within [-90, 90], got {}", point.latitude),
                ));
            }
            if !point.longitude.is_finite() || !(-180.0..=180.0).contains(&point.longitude) {
                return Err(ScoringError::invalid(
                    "location",
                    format!("longitude must be within [-180, 180], got {}", point.longitude),
                ));
            }
        }

        Ok(())
    }

    /// Pest and disease share one penalty: either flag triggers it, both do not double it
    pub fn has_pest_or_disease(&self) -> bool {
        self.pest_observed || self.disease_observed
    }

    /// Parse a profile from JSON, rejecting out-of-domain labels and ranges
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        let profile: FarmProfile = serde_json::from_str(json)
            .map_err(|e| ScoringError::invalid("profile", e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }

    /// Same as `from_json`, for a profile already parsed into a JSON value
    pub fn from_value(value: &serde_json::Value) -> Result<Self, ScoringError> {
        let profile = FarmProfile::deserialize(value)
            .map_err(|e| ScoringError::invalid("profile", e.to_string()))?;
        profile.validate()?;
        Ok(profile)
    }
}

// ============================================================================
// Sample farm
// ============================================================================

/// Chennai sample farm used by the CLI when no profile is given
pub fn chennai_sample() -> FarmProfile {
    FarmProfile {
        survey_number: Some("TN-1022-5".to_string()),
        location: Some(GeoPoint {
            latitude: 13.0827,
            longitude: 80.2707,
        }),
        area_acres: 3.0,
        soil_type: SoilType::Alluvial,
        soil_ph: 6.5,
        nutrient_levels: Some(NutrientLevels {
            nitrogen: NutrientLevel::Medium,
            phosphorus: NutrientLevel::Low,
            potassium: NutrientLevel::Medium,
        }),
        water_availability: WaterAvailability::Full,
        water_source: Some(WaterSource::Borewell),
        irrigation_method: IrrigationMethod::Drip,
        soil_test_verified: true,
        ..FarmProfile::default()
    }
}
