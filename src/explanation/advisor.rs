//! Agronomist advice
//!
//! Builds the plain-text prompt handed to an external text-advice service and
//! supplies the static tips shown when that service is unavailable. Nothing
//! here is called by the scoring engine.

use crate::profile::FarmProfile;
use crate::scorer::ScoringResult;

/// External text-advice service (LLM or otherwise)
pub trait AdviceProvider {
    fn advise(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Provider that is never reachable; always yields the fallback block
pub struct OfflineAdvisor;

impl AdviceProvider for OfflineAdvisor {
    fn advise(&self, _prompt: &str) -> anyhow::Result<String> {
        anyhow::bail!("advice service not configured")
    }
}

/// Where the advice text came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceSource {
    Provider,
    Fallback,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct Advice {
    pub source: AdviceSource,
    pub prompt: String,
    pub tips: Vec<String>,
}

/// Prompt quoting the farm and its recommended crop
pub fn build_advisor_prompt(profile: &FarmProfile, result: &ScoringResult) -> String {
    format!(
        "Act as an Indian agri-expert. Farm: {} acres, {} soil, pH {:.1}, irrigation: {}. \
         Suggest 5 fertilizer and irrigation tips specifically for {} in Indian climate.",
        profile.area_acres,
        profile.soil_type,
        profile.soil_ph,
        profile.irrigation_method,
        result.recommended_crop.crop.name
    )
}

/// Static five-point advice for the recommended crop
pub fn fallback_advice(profile: &FarmProfile, result: &ScoringResult) -> Vec<String> {
    let crop = &result.recommended_crop.crop;

    let ph = profile.soil_ph;
    let ph_tip = if ph > 7.5 {
        format!("Soil Health: pH {:.1} is alkaline. Consider applying gypsum to neutralise.", ph)
    } else if ph < 5.5 {
        format!("Soil Health: pH {:.1} is acidic. Consider agricultural lime before sowing.", ph)
    } else {
        format!("Soil Health: pH {:.1} is within the usual range. Keep adding organic matter.", ph)
    };

    let irrigation_tip = if crop.name == "Paddy" {
        "Irrigation: Use AWD (Alternate Wetting and Drying) to save water in Paddy.".to_string()
    } else {
        format!(
            "Irrigation: Schedule irrigation at critical growth stages of {}; drip saves water.",
            crop.name
        )
    };

    vec![
        format!(
            "Crop Choice: {} is ideal for your {} soil; \
             prepare the nursery or seedbed before the monsoon.",
            crop.name, profile.soil_type
        ),
        ph_tip,
        irrigation_tip,
        format!(
            "Price Watch: The reference price for {} is Rs {:.0}/quintal; \
             track local mandis for better rates.",
            crop.name, crop.market_price_per_quintal
        ),
        format!(
            "Pest Control: {} carries {} pest risk; \
             scout fields weekly in the early vegetative stage.",
            crop.name,
            crop.pest_risk.to_string().to_lowercase()
        ),
    ]
}

/// Ask the provider, falling back to the static block on any failure
pub fn advise_or_fallback(
    provider: &dyn AdviceProvider,
    profile: &FarmProfile,
    result: &ScoringResult,
) -> Advice {
    let prompt = build_advisor_prompt(profile, result);

    match provider.advise(&prompt) {
        Ok(text) if !text.trim().is_empty() => Advice {
            source: AdviceSource::Provider,
            tips: text.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect(),
            prompt,
        },
        Ok(_) => {
            tracing::warn!("Advice provider returned empty text, using fallback tips");
            Advice {
                source: AdviceSource::Fallback,
                tips: fallback_advice(profile, result),
                prompt,
            }
        }
        Err(e) => {
            tracing::warn!("Advice provider unavailable ({}), using fallback tips", e);
            Advice {
                source: AdviceSource::Fallback,
                tips: fallback_advice(profile, result),
                prompt,
            }
        }
    }
}
