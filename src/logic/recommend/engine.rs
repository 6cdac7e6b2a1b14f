//! Recommendation Engine
//!
//! Maps a risk tier to a canned retention strategy. The estimated impact is
//! a lifetime-value proxy (current monthly charges projected over two
//! years), a decision-support heuristic rather than a revenue forecast.

use super::types::Recommendation;
use crate::logic::features::input::InternetService;
use crate::logic::risk::RiskTier;

/// LTV projection horizon for the High-risk impact figure
pub const LTV_HORIZON_MONTHS: f32 = 24.0;

/// Discount offered to High-risk customers switching to a 1-year plan (%)
pub const RETENTION_DISCOUNT_PERCENT: u32 = 15;

/// Produce the retention strategy for one assessed customer
pub fn recommend(
    tier: RiskTier,
    monthly_charges: f32,
    internet_service: InternetService,
) -> Recommendation {
    match tier {
        RiskTier::High => {
            let estimated_impact = monthly_charges * LTV_HORIZON_MONTHS;
            Recommendation {
                headline: "Action Required: Intervention".to_string(),
                script: format!(
                    "Hi, I noticed you've been a valued customer. To thank you for \
                     your loyalty, I can apply a {}% discount to your bill if we \
                     switch you to a 1-Year plan today.",
                    RETENTION_DISCOUNT_PERCENT
                ),
                estimated_impact: Some(estimated_impact),
            }
        }
        RiskTier::Moderate => Recommendation {
            headline: "Action Required: Soft Retention".to_string(),
            script: format!(
                "Hi, just checking in to ensure your {} service is working \
                 perfectly. We also have a complimentary tech support check-up \
                 available if you'd like to use it.",
                internet_service.as_str()
            ),
            estimated_impact: None,
        },
        RiskTier::Low => Recommendation {
            headline: "No Action Needed".to_string(),
            script: "No immediate action required. Maintain standard service quality."
                .to_string(),
            estimated_impact: None,
        },
    }
}

// ============================================================================
// TESTS
// ============================================================================
