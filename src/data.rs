//! Crop catalog
//!
//! Static crop economics loaded once at start-up. The catalog is immutable
//! after construction and shared between scoring calls through an `Arc`.
//!
//! Prices are mandi prices per quintal (100 kg); yields are quintals per acre.

use crate::profile::SoilType;
use crate::utils::labels::{labelled_string_impls, Labelled};
use anyhow::{Context, Result};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Ordinal risk rating used for pest and market risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl Labelled for RiskLevel {
    const FIELD: &'static str = "risk_level";

    fn all() -> &'static [Self] {
        &[RiskLevel::Low, RiskLevel::Medium, RiskLevel::High]
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            RiskLevel::Low => &["Low"],
            RiskLevel::Medium => &["Medium", "Moderate"],
            RiskLevel::High => &["High"],
        }
    }
}

labelled_string_impls!(RiskLevel);

/// Reference economics for one crop variety
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CropRecord {
    pub name: String,
    /// Mandi price (currency per quintal)
    pub market_price_per_quintal: f64,
    /// Expected yield (quintals per acre)
    pub yield_per_acre: f64,
    /// Cultivation cost (currency per acre)
    pub cost_per_acre: f64,
    /// Editorial suitability weight (0-100)
    pub base_suitability: f64,
    pub pest_risk: RiskLevel,
    pub market_risk: RiskLevel,
    /// Soils on which the crop takes no suitability discount
    #[serde(default)]
    pub preferred_soils: Vec<SoilType>,
}

impl CropRecord {
    pub fn prefers(&self, soil: SoilType) -> bool {
        self.preferred_soils.contains(&soil)
    }

    fn check(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Crop with empty name in catalog");
        }

        let amounts = [
            ("market_price_per_quintal", self.market_price_per_quintal),
            ("yield_per_acre", self.yield_per_acre),
            ("cost_per_acre", self.cost_per_acre),
        ];
        for (field, value) in amounts {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Crop '{}': {} must be >= 0, got {}", self.name, field, value);
            }
        }

        if !self.base_suitability.is_finite() || !(0.0..=100.0).contains(&self.base_suitability) {
            anyhow::bail!(
                "Crop '{}': base_suitability must be within [0, 100], got {}",
                self.name,
                self.base_suitability
            );
        }

        Ok(())
    }
}

/// Immutable, insertion-ordered crop catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    crops: Arc<[CropRecord]>,
    by_name: Arc<FxHashMap<String, usize>>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names and out-of-range values
    pub fn new(crops: Vec<CropRecord>) -> Result<Self> {
        let mut by_name = FxHashMap::default();
        for (idx, crop) in crops.iter().enumerate() {
            crop.check()?;
            if by_name.insert(crop.name.clone(), idx).is_some() {
                anyhow::bail!("Duplicate crop name in catalog: '{}'", crop.name);
            }
        }

        Ok(Self {
            crops: crops.into(),
            by_name: Arc::new(by_name),
        })
    }

    /// Load a catalog from a JSON array of crop records
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read crop catalog: {:?}", path))?;

        let crops: Vec<CropRecord> = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse crop catalog JSON: {:?}", path))?;

        let catalog =
            Self::new(crops).with_context(|| format!("Invalid crop catalog: {:?}", path))?;
        tracing::info!("Loaded {} crops from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    /// Canonical catalog (Indian mandi prices per quintal, per-acre yields)
    pub fn builtin() -> Self {
        use RiskLevel::*;
        use SoilType::*;

        let crop = |name: &str,
                    price: f64,
                    yield_per_acre: f64,
                    cost: f64,
                    suitability: f64,
                    pest_risk: RiskLevel,
                    market_risk: RiskLevel,
                    soils: &[SoilType]| CropRecord {
            name: name.to_string(),
            market_price_per_quintal: price,
            yield_per_acre,
            cost_per_acre: cost,
            base_suitability: suitability,
            pest_risk,
            market_risk,
            preferred_soils: soils.to_vec(),
        };

        let crops = vec![
            crop("Paddy", 2250.0, 25.0, 25000.0, 94.5, Medium, Low, &[Alluvial, Clayey]),
            crop("Sugarcane", 3150.0, 350.0, 85000.0, 88.0, Medium, Medium, &[Alluvial, Black]),
            crop("Cotton", 7050.0, 12.0, 30000.0, 91.2, High, High, &[Black, Red, Laterite, Sandy]),
            crop("Maize", 2090.0, 22.0, 18000.0, 85.6, Medium, Medium, &[Alluvial, Red, Loamy]),
            crop("Groundnut", 6375.0, 15.0, 28000.0, 82.3, Low, Medium, &[Red, Sandy, Laterite]),
        ];

        let by_name = crops
            .iter()
            .enumerate()
            .map(|(idx, c)| (c.name.clone(), idx))
            .collect();

        Self {
            crops: crops.into(),
            by_name: Arc::new(by_name),
        }
    }

    /// Catalog with no entries (scoring against it fails with `EmptyCatalog`)
    pub fn empty() -> Self {
        Self {
            crops: Arc::from(Vec::new()),
            by_name: Arc::new(FxHashMap::default()),
        }
    }

    pub fn crops(&self) -> &[CropRecord] {
        &self.crops
    }

    pub fn get(&self, name: &str) -> Option<&CropRecord> {
        self.by_name.get(name).map(|&idx| &self.crops[idx])
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CropRecord {
        CropRecord {
            name: name.to_string(),
            market_price_per_quintal: 2000.0,
            yield_per_acre: 20.0,
            cost_per_acre: 15000.0,
            base_suitability: 80.0,
            pest_risk: RiskLevel::Low,
            market_risk: RiskLevel::Low,
            preferred_soils: vec![SoilType::Red],
        }
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.crops()[0].name, "Paddy");

        let paddy = catalog.get("Paddy").unwrap();
        assert_eq!(paddy.market_price_per_quintal, 2250.0);
        assert!(paddy.prefers(SoilType::Clayey));
        assert!(!paddy.prefers(SoilType::Black));

        // Builtin data passes the same checks as loaded data
        assert!(Catalog::new(catalog.crops().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = Catalog::new(vec![record("Maize"), record("Maize")]).unwrap_err();
        assert!(err.to_string().contains("Duplicate crop name"));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut bad = record("Maize");
        bad.base_suitability = 101.0;
        assert!(Catalog::new(vec![bad]).is_err());

        let mut bad = record("Maize");
        bad.cost_per_acre = -1.0;
        assert!(Catalog::new(vec![bad]).is_err());
    }

    #[test]
    fn test_catalog_json() {
        let json = r#"[{
            "name": "Wheat",
            "market_price_per_quintal": 2275,
            "yield_per_acre": 18,
            "cost_per_acre": 20000,
            "base_suitability": 87.0,
            "pest_risk": "Low",
            "market_risk": "Moderate",
            "preferred_soils": ["Alluvial Soil", "Loam"]
        }]"#;
        let crops: Vec<CropRecord> = serde_json::from_str(json).unwrap();
        let catalog = Catalog::new(crops).unwrap();
        let wheat = catalog.get("Wheat").unwrap();
        assert_eq!(wheat.market_risk, RiskLevel::Medium);
        assert_eq!(wheat.preferred_soils, vec![SoilType::Alluvial, SoilType::Loamy]);
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::empty();
        assert!(catalog.is_empty());
        assert!(catalog.get("Paddy").is_none());
    }
}
