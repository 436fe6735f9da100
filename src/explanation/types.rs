use crate::profile::FarmProfile;
use crate::scorer::ScoringResult;
use serde::Serialize;

/// Profile and result bundled for export
#[derive(Debug, Clone, Serialize)]
pub struct FarmReport<'a> {
    pub profile: &'a FarmProfile,
    pub result: &'a ScoringResult,
}

impl<'a> FarmReport<'a> {
    pub fn new(profile: &'a FarmProfile, result: &'a ScoringResult) -> Self {
        Self { profile, result }
    }
}

/// Flat per-crop row used by the CSV export
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow<'a> {
    #[serde(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Crop")]
    pub crop: &'a str,
    #[serde(rename = "Mandi Price (Rs/Q)")]
    pub price_per_quintal: f64,
    #[serde(rename = "Expected Yield (Q/Acre)")]
    pub yield_per_acre: f64,
    #[serde(rename = "Cost (Rs/Acre)")]
    pub cost_per_acre: f64,
    #[serde(rename = "Suitability Score")]
    pub suitability: f64,
    #[serde(rename = "Pest Risk")]
    pub pest_risk: String,
    #[serde(rename = "Market Risk")]
    pub market_risk: String,
    #[serde(rename = "Total Revenue (Rs)")]
    pub gross_revenue: f64,
    #[serde(rename = "Net Profit (Rs)")]
    pub net_profit: f64,
}

impl ScoringResult {
    /// One export row per ranked crop
    pub fn report_rows(&self) -> Vec<ReportRow<'_>> {
        self.ranked_crops
            .iter()
            .enumerate()
            .map(|(idx, r)| ReportRow {
                rank: idx + 1,
                crop: &r.crop.name,
                price_per_quintal: r.crop.market_price_per_quintal,
                yield_per_acre: r.crop.yield_per_acre,
                cost_per_acre: r.crop.cost_per_acre,
                suitability: r.suitability,
                pest_risk: r.crop.pest_risk.to_string(),
                market_risk: r.crop.market_risk.to_string(),
                gross_revenue: r.gross_revenue,
                net_profit: r.net_profit,
            })
            .collect()
    }
}
