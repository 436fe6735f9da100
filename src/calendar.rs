//! Illustrative planting calendar
//!
//! A crops x months heatmap of made-up suitability values for dashboards.
//! It is random by construction and lives outside the scoring path; pass a
//! seeded RNG to make it reproducible.

use rand::Rng;
use serde::Serialize;

/// Kharif-first agricultural year
pub const KHARIF_MONTHS: [&str; 12] = [
    "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May",
];

/// Crops shown on the default calendar
pub const CALENDAR_CROPS: [&str; 5] = ["Paddy", "Wheat", "Cotton", "Mustard", "Moong Dal"];

/// Heatmap cells are drawn from [40, 98)
pub const HEATMAP_RANGE: std::ops::Range<u32> = 40..98;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub crops: Vec<String>,
    pub months: Vec<String>,
    /// values[crop][month]
    pub values: Vec<Vec<u32>>,
}

/// Generate an illustrative heatmap for the given crops and months
pub fn illustrative_heatmap<R: Rng>(rng: &mut R, crops: &[&str], months: &[&str]) -> Heatmap {
    let values: Vec<Vec<u32>> = crops
        .iter()
        .map(|_| months.iter().map(|_| rng.gen_range(HEATMAP_RANGE)).collect::<Vec<u32>>())
        .collect();

    Heatmap {
        crops: crops.iter().map(|c| c.to_string()).collect(),
        months: months.iter().map(|m| m.to_string()).collect(),
        values,
    }
}

/// Default 5 crops x 12 kharif-first months
pub fn default_heatmap<R: Rng>(rng: &mut R) -> Heatmap {
    illustrative_heatmap(rng, &CALENDAR_CROPS, &KHARIF_MONTHS)
}
