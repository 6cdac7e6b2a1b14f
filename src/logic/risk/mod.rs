//! Risk Module
//!
//! Maps a churn probability into a discrete risk tier. This is where the
//! Low/Moderate/High decision is made.
//!
//! ## Structure
//! - `types`: Core types (RiskTier, PredictionResult)
//! - `rules`: Thresholds and constants
//! - `classifier`: Classification logic
//!
//! ## Usage
//! ```ignore
//! use retention_core::logic::risk::{classify, RiskTier};
//!
//! match classify(0.65) {
//!     RiskTier::Low => println!("No action"),
//!     RiskTier::Moderate => println!("Monitor"),
//!     RiskTier::High => println!("Intervene"),
//! }
//! ```

pub mod classifier;
pub mod rules;
pub mod types;

// Re-export main types for convenience
pub use classifier::{classify, classify_with_thresholds};
pub use rules::{RiskThresholds, HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD};
pub use types::{PredictionResult, RiskTier};
