//! Model Module - Frozen Classifier Binding
//!
//! The churn classifier is a frozen external artifact. The core depends only
//! on the `ChurnModel` contract; the ONNX binding lives in `inference`.

pub mod inference;

// Re-export main types for convenience
pub use inference::{ChurnModel, InferenceError, OnnxChurnModel};
