//! Command-line interface definitions and argument parsing
//!
//! The CLI is the thin input surface over the core: it supplies the artifact
//! paths and one customer profile, and prints the assessment as JSON.
//! Domain validation happens here, before the encoder ever runs.

use std::path::PathBuf;

use clap::Parser;

use crate::constants;
use crate::error::{CoreError, CoreResult};
use crate::logic::features::RawInput;
use crate::logic::pipeline::ArtifactPaths;

/// Churn risk assessment for a single customer profile
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the feature schema artifact (JSON array of column names)
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// Path to the frozen churn classifier (ONNX)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Path to a JSON file holding the customer profile
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Inline customer profile as a JSON string
    /// Example: --customer '{"tenure":12,"monthly_charges":70.0,...}'
    #[arg(short, long)]
    pub customer: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Args {
    /// Resolve artifact paths: CLI flag, then env var, then default
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths {
            schema: self
                .schema
                .clone()
                .unwrap_or_else(|| PathBuf::from(constants::get_schema_path())),
            model: self
                .model
                .clone()
                .unwrap_or_else(|| PathBuf::from(constants::get_model_path())),
        }
    }

    /// Read and validate the customer profile from --input or --customer
    pub fn parse_raw_input(&self) -> CoreResult<RawInput> {
        let raw_json = match (&self.input, &self.customer) {
            (Some(path), _) => std::fs::read_to_string(path)
                .map_err(|e| CoreError::InvalidInput(format!("read {}: {}", path.display(), e)))?,
            (None, Some(inline)) => inline.clone(),
            (None, None) => {
                return Err(CoreError::InvalidInput(
                    "provide a customer profile via --input or --customer".to_string(),
                ))
            }
        };

        let raw: RawInput = serde_json::from_str(&raw_json)
            .map_err(|e| CoreError::InvalidInput(format!("malformed customer profile: {}", e)))?;

        raw.validate()?;

        Ok(raw)
    }
}
