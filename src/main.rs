//! Customer Retention Intelligence - Main Entry Point
//!
//! Loads the frozen artifacts once, assesses one customer profile, prints
//! the assessment as JSON. Artifact load failures are fatal: there is
//! nothing sensible to serve without the schema and classifier.

use clap::Parser;

use retention_core::cli::Args;
use retention_core::constants;
use retention_core::{CoreError, RetentionPipeline};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting {} v{}", constants::APP_NAME, constants::APP_VERSION);

    // Boundary validation happens here, before any artifact is touched
    let raw = match args.parse_raw_input() {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(2);
        }
    };

    let paths = args.artifact_paths();
    let pipeline = match RetentionPipeline::from_artifacts(&paths) {
        Ok(pipeline) => pipeline,
        Err(e @ CoreError::ArtifactMissing(_)) => {
            log::error!(
                "{}. Place the schema and classifier artifacts next to the binary \
                 or point at them with --schema/--model.",
                e
            );
            std::process::exit(1);
        }
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    match pipeline.assess(&raw) {
        Ok(assessment) => {
            let rendered = if args.pretty {
                serde_json::to_string_pretty(&assessment)
            } else {
                serde_json::to_string(&assessment)
            };

            match rendered {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    log::error!("Failed to serialize assessment: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Err(e) => {
            log::error!("Assessment failed: {}", e);
            std::process::exit(1);
        }
    }
}
