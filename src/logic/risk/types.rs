//! Risk Types
//!
//! Core types for risk classification. No logic here, only data structures.

use serde::{Deserialize, Serialize};

// ============================================================================
// RISK TIER
// ============================================================================

/// Discrete churn risk band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Loyal customer, no action needed
    Low,
    /// Showing signs of churn, monitor closely
    Moderate,
    /// Immediate intervention required
    High,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }

    pub fn severity_level(&self) -> u8 {
        match self {
            RiskTier::Low => 0,
            RiskTier::Moderate => 1,
            RiskTier::High => 2,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            RiskTier::Low => "#10b981",      // Green
            RiskTier::Moderate => "#f59e0b", // Yellow
            RiskTier::High => "#ef4444",     // Red
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// PREDICTION RESULT
// ============================================================================

/// Output of one prediction: probability plus its tier, with timing for
/// observability. Derived per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Churn probability (0.0 - 1.0)
    pub probability: f32,
    pub tier: RiskTier,
    /// Microseconds spent in the classifier
    pub inference_time_us: u64,
    /// Method used (onnx, stub)
    pub method: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(RiskTier::Low.severity_level() < RiskTier::Moderate.severity_level());
        assert!(RiskTier::Moderate.severity_level() < RiskTier::High.severity_level());
    }

    #[test]
    fn test_display() {
        assert_eq!(RiskTier::High.to_string(), "high");
    }
}
