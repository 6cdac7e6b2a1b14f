//! Feature Schema - Authoritative Column List
//!
//! The ordered list of encoded column names the classifier was trained on.
//! Loaded once at startup from an external artifact, immutable thereafter.
//!
//! The schema is authoritative: every name the encoder tries to set is
//! membership-checked first. Unknown names are skipped, never added.

use std::collections::HashMap;
use std::path::Path;

use crc32fast::Hasher;

use crate::error::{CoreError, CoreResult};

/// Ordered, unique encoded column names with O(1) membership lookup
#[derive(Debug, Clone)]
pub struct FeatureSchema {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    hash: u32,
}

impl FeatureSchema {
    /// Load the schema artifact: a JSON array of column-name strings.
    ///
    /// A missing file is a fatal startup condition (`ArtifactMissing`),
    /// surfaced to the caller and never retried.
    pub fn load<P: AsRef<Path>>(path: P) -> CoreResult<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(CoreError::ArtifactMissing(path.to_path_buf()));
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|e| CoreError::ArtifactInvalid(format!("read {}: {}", path.display(), e)))?;

        let columns: Vec<String> = serde_json::from_str(&raw)
            .map_err(|e| CoreError::ArtifactInvalid(format!("parse {}: {}", path.display(), e)))?;

        let schema = Self::from_columns(columns)?;

        log::info!(
            "Feature schema loaded: {} columns (hash: {:08x}) from {}",
            schema.len(),
            schema.hash(),
            path.display()
        );

        Ok(schema)
    }

    /// Build a schema from an in-memory column list (used by tests and
    /// by callers that fetch the artifact themselves)
    pub fn from_columns(columns: Vec<String>) -> CoreResult<Self> {
        if columns.is_empty() {
            return Err(CoreError::ArtifactInvalid("schema has no columns".to_string()));
        }

        let mut index = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                return Err(CoreError::ArtifactInvalid(format!(
                    "duplicate column in schema: {}",
                    name
                )));
            }
        }

        let hash = compute_schema_hash(&columns);

        Ok(Self { columns, index, hash })
    }

    /// Number of columns (the width of every feature vector)
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Membership check
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get column index by name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Get column name by index
    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|s| s.as_str())
    }

    /// Columns in training order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// CRC32 hash of the column list, used to tag vectors built against
    /// this schema and to spot mismatches in logs
    pub fn hash(&self) -> u32 {
        self.hash
    }
}

/// Compute CRC32 hash over the ordered column names
fn compute_schema_hash(columns: &[String]) -> u32 {
    let mut hasher = Hasher::new();
    for name in columns {
        hasher.update(name.as_bytes());
        hasher.update(&[0]); // Separator
    }
    hasher.finalize()
}

// ============================================================================
// TESTS
// ============================================================================
