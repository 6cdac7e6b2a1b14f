//! Features Module - Raw Input & Encoding
//!
//! Converts a sparse human-entered customer profile into the fixed-width
//! numeric vector the classifier expects.
//!
//! ## Structure
//! - `input`: RawInput + categorical enums with their candidate column lists
//! - `vector`: Dense feature vector aligned to a loaded schema
//! - `encoder`: The encoding pipeline + schema drift diagnostics

pub mod encoder;
pub mod input;
pub mod vector;

#[cfg(test)]
mod tests;

// Re-export common types
pub use encoder::{encode, EncodedInput, SchemaDrift};
pub use input::{Contract, InternetService, PaperlessBilling, PaymentMethod, RawInput, TechSupport};
pub use vector::FeatureVector;
