use serde::{Deserialize, Serialize};

/// Retention action for one customer, derived from their risk tier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub headline: String,
    /// Suggested agent script, ready to read out
    pub script: String,
    /// Estimated revenue at stake ($), only for High risk
    pub estimated_impact: Option<f32>,
}
