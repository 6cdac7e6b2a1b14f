//! Logic Module - Business Logic & Engines
//!
//! ## Structure
//! - `schema` - Feature schema artifact (ordered column names)
//! - `features/` - Raw input types and the feature encoder
//! - `model/` - Classifier contract + ONNX inference
//! - `risk/` - Probability -> risk tier classification
//! - `recommend/` - Tier -> retention recommendation
//! - `pipeline` - End-to-end orchestration over injected artifacts

pub mod features;
pub mod model;
pub mod pipeline;
pub mod recommend;
pub mod risk;
pub mod schema;
