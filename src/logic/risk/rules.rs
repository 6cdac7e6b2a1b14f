//! Risk Classification Rules & Thresholds
//!
//! Threshold constants for tier assignment. No classify logic here.
//!
//! These are a retention-policy choice, NOT the classifier's native 0.5
//! cutoff: the business accepts more false positives in exchange for
//! catching at-risk customers earlier, so Moderate starts at 0.30.

use serde::{Deserialize, Serialize};

// ============================================================================
// THRESHOLDS (Constants - fixed decision policy)
// ============================================================================

/// At or above this probability = at least Moderate (inclusive lower bound)
pub const MODERATE_RISK_THRESHOLD: f32 = 0.30;

/// At or above this probability = High (inclusive lower bound)
pub const HIGH_RISK_THRESHOLD: f32 = 0.60;

// ============================================================================
// CONFIGURABLE THRESHOLDS (for runtime adjustment)
// ============================================================================

/// Tier thresholds (configurable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskThresholds {
    /// At or above this = Moderate
    pub moderate_min: f32,
    /// At or above this = High
    pub high_min: f32,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate_min: MODERATE_RISK_THRESHOLD,
            high_min: HIGH_RISK_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    /// High sensitivity - lower thresholds, more customers flagged
    pub fn high_sensitivity() -> Self {
        Self {
            moderate_min: 0.2,
            high_min: 0.5,
        }
    }

    /// Low sensitivity - higher thresholds, fewer customers flagged
    pub fn low_sensitivity() -> Self {
        Self {
            moderate_min: 0.4,
            high_min: 0.7,
        }
    }
}
