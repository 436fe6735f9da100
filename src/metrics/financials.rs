//! FINANCIAL AGGREGATION
//!
//! Totals over an existing ranking so reporting and export do not need to
//! re-run the ranking. Pure summation.

use super::suitability::RankedCrop;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropFinancials {
    pub name: String,
    pub gross_revenue: f64,
    pub total_cost: f64,
    pub net_profit: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FinancialSummary {
    pub total_gross_revenue: f64,
    pub total_cost: f64,
    pub total_net_profit: f64,
    /// One entry per ranked crop, in ranking order
    pub per_crop: Vec<CropFinancials>,
}

pub fn aggregate_financials(ranked_crops: &[RankedCrop]) -> FinancialSummary {
    let per_crop: Vec<CropFinancials> = ranked_crops
        .iter()
        .map(|r| CropFinancials {
            name: r.crop.name.clone(),
            gross_revenue: r.gross_revenue,
            total_cost: r.total_cost,
            net_profit: r.net_profit,
        })
        .collect();

    FinancialSummary {
        total_gross_revenue: per_crop.iter().map(|c| c.gross_revenue).sum(),
        total_cost: per_crop.iter().map(|c| c.total_cost).sum(),
        total_net_profit: per_crop.iter().map(|c| c.net_profit).sum(),
        per_crop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Catalog;
    use crate::metrics::rank_crops;
    use crate::profile::FarmProfile;
    use crate::utils::ScoringConstants;
    use approx::assert_relative_eq;

    #[test]
    fn test_totals_match_rows() {
        let catalog = Catalog::builtin();
        let profile = FarmProfile { area_acres: 2.0, ..FarmProfile::default() };
        let ranked = rank_crops(&profile, catalog.crops(), &ScoringConstants::default()).unwrap();

        let summary = aggregate_financials(&ranked);
        assert_eq!(summary.per_crop.len(), 5);
        assert_eq!(summary.per_crop[0].name, ranked[0].crop.name);

        let gross: f64 = ranked.iter().map(|r| r.gross_revenue).sum();
        let net: f64 = ranked.iter().map(|r| r.net_profit).sum();
        assert_relative_eq!(summary.total_gross_revenue, gross);
        assert_relative_eq!(summary.total_net_profit, net);
        assert_relative_eq!(
            summary.total_gross_revenue - summary.total_cost,
            summary.total_net_profit,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_empty_ranking() {
        let summary = aggregate_financials(&[]);
        assert!(summary.per_crop.is_empty());
        assert_eq!(summary.total_gross_revenue, 0.0);
        assert_eq!(summary.total_net_profit, 0.0);
    }
}
