//! Prediction Pipeline
//!
//! End-to-end orchestration: RawInput -> encode -> predict -> classify ->
//! recommend. Stateless per request; the schema and classifier are loaded
//! once at startup and owned here, injected rather than reached into via
//! globals.

use std::path::PathBuf;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::logic::features::{encode, RawInput, SchemaDrift};
use crate::logic::model::{ChurnModel, OnnxChurnModel};
use crate::logic::recommend::{recommend, Recommendation};
use crate::logic::risk::{classify_with_thresholds, PredictionResult, RiskThresholds};
use crate::logic::schema::FeatureSchema;

/// Where the startup artifacts live on disk
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub schema: PathBuf,
    pub model: PathBuf,
}

/// Terminal output of one assessment, ready for the output surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    pub prediction: PredictionResult,
    pub recommendation: Recommendation,
    /// Advisory encoding diagnostics; empty in the healthy case
    pub drift: Vec<SchemaDrift>,
}

/// The assembled core: schema + classifier + tier policy.
///
/// Construct once at startup, then share read-only. Every call to `assess`
/// builds its own vector; there is no per-request mutable state here.
pub struct RetentionPipeline {
    schema: FeatureSchema,
    model: Box<dyn ChurnModel>,
    thresholds: RiskThresholds,
}

impl RetentionPipeline {
    pub fn new(schema: FeatureSchema, model: Box<dyn ChurnModel>, thresholds: RiskThresholds) -> Self {
        Self {
            schema,
            model,
            thresholds,
        }
    }

    /// Load both artifacts and assemble the pipeline with the standard
    /// thresholds. Any failure here is fatal to startup.
    pub fn from_artifacts(paths: &ArtifactPaths) -> CoreResult<Self> {
        let schema = FeatureSchema::load(&paths.schema)?;
        let model = OnnxChurnModel::load(&paths.model, schema.len())?;

        Ok(Self::new(schema, Box::new(model), RiskThresholds::default()))
    }

    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    /// Assess one validated customer profile
    pub fn assess(&self, raw: &RawInput) -> CoreResult<Assessment> {
        let encoded = encode(raw, &self.schema);

        for drift in &encoded.drift {
            log::warn!("{}", drift);
        }

        let start = Instant::now();
        let probability = self.model.predict_probability(&encoded.vector)?;
        let inference_time_us = start.elapsed().as_micros() as u64;

        let tier = classify_with_thresholds(probability, &self.thresholds);
        let recommendation = recommend(tier, raw.monthly_charges, raw.internet_service);

        log::debug!(
            "Assessed customer: probability={:.4} tier={} in {}us",
            probability,
            tier,
            inference_time_us
        );

        Ok(Assessment {
            prediction: PredictionResult {
                probability,
                tier,
                inference_time_us,
                method: self.model.method().to_string(),
            },
            recommendation,
            drift: encoded.drift,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
