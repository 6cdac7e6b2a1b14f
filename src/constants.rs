//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change default artifact locations, only edit this file.

/// Default path to the serialized feature schema artifact
///
/// This is the fallback path when no environment variable or CLI flag is set.
/// The artifact is a JSON array of encoded column names, in the exact order
/// the classifier was trained on.
pub const DEFAULT_SCHEMA_PATH: &str = "model_columns.json";

/// Default path to the frozen churn classifier (ONNX)
pub const DEFAULT_MODEL_PATH: &str = "churn_model.onnx";

/// App version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// App name
pub const APP_NAME: &str = "Retention Intelligence Core";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get schema artifact path from environment or use default
pub fn get_schema_path() -> String {
    std::env::var("CHURN_SCHEMA_PATH").unwrap_or_else(|_| DEFAULT_SCHEMA_PATH.to_string())
}

/// Get model artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("CHURN_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}
