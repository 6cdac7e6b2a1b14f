//! Feature Vector - Dense Input Row for the Classifier
//!
//! A single row of numeric features aligned to a loaded `FeatureSchema`.
//! Starts all-zero and is selectively overwritten: the zero default IS the
//! baseline category for every omitted one-hot flag.
//!
//! Unlike a compile-time layout, the schema arrives at startup, so the
//! vector is a `Vec<f32>` sized to the schema and tagged with the schema
//! hash so a vector built against a stale schema is detectable.

use serde::{Deserialize, Serialize};

use crate::logic::schema::FeatureSchema;

/// One prediction row. Lifetime is a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Hash of the schema this vector was built against
    pub schema_hash: u32,
    /// Values in schema column order
    pub values: Vec<f32>,
}

impl FeatureVector {
    /// Create an all-zero vector spanning the schema
    pub fn zeroed(schema: &FeatureSchema) -> Self {
        Self {
            schema_hash: schema.hash(),
            values: vec![0.0; schema.len()],
        }
    }

    /// Set a value by column name. Returns false when the schema does not
    /// contain the name, or when the resolved index falls outside this
    /// vector (a schema the vector was not built against); the vector is
    /// left untouched in either case.
    pub fn set_by_name(&mut self, schema: &FeatureSchema, name: &str, value: f32) -> bool {
        match schema.index_of(name).and_then(|i| self.values.get_mut(i)) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Get a value by column name
    pub fn get_by_name(&self, schema: &FeatureSchema, name: &str) -> Option<f32> {
        schema.index_of(name).and_then(|i| self.values.get(i).copied())
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check that this vector was built against the given schema
    pub fn is_aligned(&self, schema: &FeatureSchema) -> bool {
        self.schema_hash == schema.hash() && self.values.len() == schema.len()
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self, schema: &FeatureSchema) -> serde_json::Value {
        serde_json::json!({
            "schema_hash": self.schema_hash,
            "named_values": schema
                .columns()
                .iter()
                .zip(self.values.iter())
                .map(|(name, value)| (name.clone(), *value))
                .collect::<std::collections::HashMap<_, _>>(),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeatureSchema {
        FeatureSchema::from_columns(
            ["tenure", "monthlycharges", "totalcharges"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_zeroed_spans_schema() {
        let schema = schema();
        let vector = FeatureVector::zeroed(&schema);

        assert_eq!(vector.len(), schema.len());
        assert_eq!(vector.schema_hash, schema.hash());
        assert!(vector.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_by_name() {
        let schema = schema();
        let mut vector = FeatureVector::zeroed(&schema);

        assert!(vector.set_by_name(&schema, "tenure", 12.0));
        assert_eq!(vector.get_by_name(&schema, "tenure"), Some(12.0));
    }

    #[test]
    fn test_set_unknown_name_is_noop() {
        let schema = schema();
        let mut vector = FeatureVector::zeroed(&schema);

        assert!(!vector.set_by_name(&schema, "Tenure", 12.0));
        assert!(vector.as_slice().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_set_through_foreign_schema_is_noop() {
        // Vector built against a 1-column schema, set through a wider one:
        // the resolved index is out of bounds and must degrade to false
        let narrow = FeatureSchema::from_columns(vec!["tenure".to_string()]).unwrap();
        let wide = schema();

        let mut vector = FeatureVector::zeroed(&narrow);
        assert!(!vector.set_by_name(&wide, "totalcharges", 840.0));
        assert_eq!(vector.as_slice(), &[0.0]);

        // A name whose index fits both schemas still resolves
        assert!(vector.set_by_name(&wide, "tenure", 12.0));
        assert_eq!(vector.as_slice(), &[12.0]);
    }

    #[test]
    fn test_alignment_check() {
        let schema = schema();
        let other = FeatureSchema::from_columns(vec!["tenure".to_string()]).unwrap();

        let vector = FeatureVector::zeroed(&schema);
        assert!(vector.is_aligned(&schema));
        assert!(!vector.is_aligned(&other));
    }

    #[test]
    fn test_to_log_entry() {
        let schema = schema();
        let mut vector = FeatureVector::zeroed(&schema);
        vector.set_by_name(&schema, "monthlycharges", 70.0);

        let log = vector.to_log_entry(&schema);
        assert_eq!(log["named_values"]["monthlycharges"], 70.0);
        assert!(log["schema_hash"].as_u64().is_some());
    }
}
