use crate::explanation::types::FarmReport;

/// JSON formatter for farm reports
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format report as pretty-printed JSON
    pub fn format(report: &FarmReport) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(report)
    }

    /// Format report as compact JSON (no whitespace)
    pub fn format_compact(report: &FarmReport) -> Result<String, serde_json::Error> {
        serde_json::to_string(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::chennai_sample;
    use crate::scorer::FarmScorer;

    #[test]
    fn test_format_json() {
        let profile = chennai_sample();
        let result = FarmScorer::with_defaults().score(&profile).unwrap();
        let json = JsonFormatter::format(&FarmReport::new(&profile, &result)).unwrap();

        assert!(json.contains("\"soil_type\": \"Alluvial\""));
        assert!(json.contains("\"sustainability_score\": 75"));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"]["recommended_crop"]["crop"]["name"], "Paddy");
        assert_eq!(value["result"]["ranked_crops"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_format_compact() {
        let profile = chennai_sample();
        let result = FarmScorer::with_defaults().score(&profile).unwrap();
        let json = JsonFormatter::format_compact(&FarmReport::new(&profile, &result)).unwrap();

        assert!(!json.contains('\n'));
        assert!(json.contains("\"area_acres\":3.0"));
    }
}
