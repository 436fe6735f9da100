use crate::explanation::types::FarmReport;

/// Markdown formatter for farm reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn format(report: &FarmReport) -> String {
        let profile = report.profile;
        let result = report.result;
        let best = &result.recommended_crop;
        let mut md = String::new();

        md.push_str("# Farm Analysis Summary\n\n");
        if let Some(survey) = &profile.survey_number {
            md.push_str(&format!("**Survey No.:** {}\n\n", survey));
        }
        md.push_str(&format!(
            "| Best Recommended Crop | Expected Net Profit | Sustainability | Land Area |\n\
             |---|---|---|---|\n\
             | {} | Rs {} | {}/100 | {} acres |\n\n",
            best.crop.name,
            group_thousands(best.net_profit),
            result.sustainability_score,
            profile.area_acres
        ));

        md.push_str("## Soil Profile\n\n");
        md.push_str(&format!("- Soil type: {}\n", profile.soil_type));
        md.push_str(&format!("- pH: {:.1}\n", profile.soil_ph));
        if let Some(n) = &profile.nutrient_levels {
            md.push_str(&format!(
                "- Nitrogen: {} | Phosphorus: {} | Potassium: {}\n",
                n.nitrogen, n.phosphorus, n.potassium
            ));
        }
        md.push_str(&format!(
            "- Soil test verified: {}\n\n",
            if profile.soil_test_verified { "yes" } else { "no" }
        ));

        md.push_str("## Crop Ranking\n\n");
        md.push_str(
            "| # | Crop | Suitability | Gross Revenue (Rs) | Net Profit (Rs) | Pest Risk | Market Risk |\n",
        );
        md.push_str("|---|---|---|---|---|---|---|\n");
        for (idx, r) in result.ranked_crops.iter().enumerate() {
            md.push_str(&format!(
                "| {} | {} | {:.1} | {} | {} | {} | {} |\n",
                idx + 1,
                r.crop.name,
                r.suitability,
                group_thousands(r.gross_revenue),
                group_thousands(r.net_profit),
                r.crop.pest_risk,
                r.crop.market_risk
            ));
        }

        md.push_str(&format!(
            "\n**Totals across all crops:** revenue Rs {}, net profit Rs {}\n",
            group_thousands(result.financials.total_gross_revenue),
            group_thousands(result.financials.total_net_profit)
        ));

        md
    }
}

/// 168750.4 -> "168,750"
fn group_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if rounded < 0 {
        format!("-{}", out)
    } else {
        out
    }
}
