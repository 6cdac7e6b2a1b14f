//! Inference Engine - ONNX Runtime Integration
//!
//! Loads and runs the frozen churn classifier. Kept behind the `ChurnModel`
//! trait so the pipeline can be exercised with a stub model in tests.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use crate::error::{CoreError, CoreResult};
use crate::logic::features::FeatureVector;

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// CLASSIFIER CONTRACT
// ============================================================================

/// The contract the core depends on: one row in, churn probability out.
///
/// The probability is the classifier's positive-class output in [0, 1].
pub trait ChurnModel: Send + Sync {
    fn predict_probability(&self, vector: &FeatureVector) -> Result<f32, InferenceError>;

    /// Short identifier for logs and results ("onnx", "stub")
    fn method(&self) -> &'static str {
        "onnx"
    }
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX-backed churn classifier.
///
/// Loaded once at startup and shared read-only; the session sits behind a
/// mutex because ort's run takes `&mut Session`.
pub struct OnnxChurnModel {
    session: Mutex<Session>,
    /// Expected feature vector width (the loaded schema's length)
    features: usize,
}

impl OnnxChurnModel {
    /// Load the ONNX artifact. `features` is the width the vector must have,
    /// i.e. the loaded schema's length.
    ///
    /// A missing file is a fatal startup condition, never retried. A model
    /// trained on a different column count is caught here too: a zeroed
    /// warm-up row of the schema's width is run through the session, so a
    /// width mismatch fails startup instead of the first live request.
    pub fn load<P: AsRef<Path>>(model_path: P, features: usize) -> CoreResult<Self> {
        let path = model_path.as_ref();
        log::info!("Loading ONNX churn model from: {}", path.display());

        if !path.exists() {
            return Err(CoreError::ArtifactMissing(path.to_path_buf()));
        }

        let session = Session::builder()
            .map_err(|e| CoreError::Inference(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| CoreError::Inference(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| CoreError::Inference(format!("Failed to load model: {}", e)))?;

        let model = Self {
            session: Mutex::new(session),
            features,
        };

        let warmup = FeatureVector {
            schema_hash: 0,
            values: vec![0.0; features],
        };
        if let Err(e) = model.predict_probability(&warmup) {
            return Err(warmup_rejection(features, e));
        }

        log::info!("ONNX churn model loaded successfully ({} features)", features);

        Ok(model)
    }
}

impl ChurnModel for OnnxChurnModel {
    fn predict_probability(&self, vector: &FeatureVector) -> Result<f32, InferenceError> {
        if vector.len() != self.features {
            return Err(InferenceError(format!(
                "feature vector has {} values, model expects {}",
                vector.len(),
                self.features
            )));
        }

        let input_array = Array2::<f32>::from_shape_vec(
            (1, vector.len()),
            vector.as_slice().to_vec(),
        )
        .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let mut session = self.session.lock();

        // Classifier exports commonly emit the label tensor first and the
        // probabilities last; read the last output.
        let output_name = session
            .outputs
            .last()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        let data = output_tensor.1;

        extract_probability(data)
    }
}

/// Map a startup warm-up failure to the fatal artifact error
fn warmup_rejection(features: usize, err: InferenceError) -> CoreError {
    CoreError::ArtifactInvalid(format!(
        "model rejected a {}-wide input row: {}",
        features, err
    ))
}

/// Pull the positive-class probability out of the raw output row.
///
/// Two shapes occur in practice: a two-column row [p(retain), p(churn)],
/// and a single value that is either already a probability or a raw logit.
fn extract_probability(data: &[f32]) -> Result<f32, InferenceError> {
    let probability = match data.len() {
        0 => return Err(InferenceError("Empty model output".to_string())),
        1 => {
            let v = data[0];
            if (0.0..=1.0).contains(&v) {
                v
            } else {
                // Raw logit output: apply sigmoid
                1.0 / (1.0 + (-v).exp())
            }
        }
        n => data[n - 1],
    };

    Ok(probability.clamp(0.0, 1.0))
}

// ============================================================================
// TESTS
// ============================================================================
