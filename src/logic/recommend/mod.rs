//! Recommend Module
//!
//! Static retention-strategy lookup keyed by risk tier, parameterized by
//! monthly charges and the customer's internet-service selection. No
//! learning, no adaptation.
//!
//! ## Structure
//! - `types`: Recommendation output type
//! - `engine`: The tier -> strategy table

pub mod engine;
pub mod types;

// Re-export main types for convenience
pub use engine::{recommend, LTV_HORIZON_MONTHS, RETENTION_DISCOUNT_PERCENT};
pub use types::Recommendation;
