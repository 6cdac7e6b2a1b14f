//! Customer Retention Intelligence - Core Service
//!
//! Predicts churn probability for a single customer profile, maps it into a
//! risk tier, and produces a retention recommendation.
//!
//! Pipeline: RawInput -> Encoder -> FeatureVector -> Classifier ->
//! probability -> RiskClassifier -> RiskTier -> RecommendationEngine.
//!
//! The classifier and its feature schema are frozen external artifacts,
//! loaded once at startup and injected into the pipeline.

pub mod cli;
pub mod constants;
pub mod error;
pub mod logic;

// Re-export common types for easier access
pub use error::{CoreError, CoreResult};
pub use logic::features::{encode, EncodedInput, FeatureVector, RawInput, SchemaDrift};
pub use logic::pipeline::{ArtifactPaths, Assessment, RetentionPipeline};
pub use logic::risk::{classify, PredictionResult, RiskTier};
pub use logic::schema::FeatureSchema;
