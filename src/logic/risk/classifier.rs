//! Risk Classifier
//!
//! Pure probability -> tier mapping, total over [0, 1].
//! Input: churn probability. Output: RiskTier.

use super::rules::RiskThresholds;
use super::types::RiskTier;

/// Classify a churn probability with the standard policy thresholds
pub fn classify(probability: f32) -> RiskTier {
    classify_with_thresholds(probability, &RiskThresholds::default())
}

/// Classification with custom thresholds. Lower bounds are inclusive.
pub fn classify_with_thresholds(probability: f32, thresholds: &RiskThresholds) -> RiskTier {
    if probability >= thresholds.high_min {
        RiskTier::High
    } else if probability >= thresholds.moderate_min {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(classify(0.0), RiskTier::Low);
        assert_eq!(classify(0.299999), RiskTier::Low);
        assert_eq!(classify(0.3), RiskTier::Moderate);
        assert_eq!(classify(0.599999), RiskTier::Moderate);
        assert_eq!(classify(0.6), RiskTier::High);
        assert_eq!(classify(1.0), RiskTier::High);
    }

    #[test]
    fn test_monotonic_over_unit_interval() {
        let mut last = RiskTier::Low;
        for i in 0..=100 {
            let tier = classify(i as f32 / 100.0);
            assert!(tier.severity_level() >= last.severity_level());
            last = tier;
        }
    }

    #[test]
    fn test_custom_thresholds() {
        let sensitive = RiskThresholds::high_sensitivity();
        assert_eq!(classify_with_thresholds(0.25, &sensitive), RiskTier::Moderate);
        assert_eq!(classify_with_thresholds(0.55, &sensitive), RiskTier::High);

        let relaxed = RiskThresholds::low_sensitivity();
        assert_eq!(classify_with_thresholds(0.35, &relaxed), RiskTier::Low);
        assert_eq!(classify_with_thresholds(0.65, &relaxed), RiskTier::Moderate);
    }
}
