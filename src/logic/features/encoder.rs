//! Feature Encoder
//!
//! Builds the single-row feature vector the classifier expects from a
//! validated `RawInput`, aligned to the loaded schema.
//!
//! Every assignment is membership-checked against the schema. A categorical
//! selection whose candidate columns are all absent is NOT an error: the
//! group stays zero and a `SchemaDrift` diagnostic is reported, since it
//! means the serving-time category set has diverged from the training-time
//! columns.

use serde::{Deserialize, Serialize};

use super::input::RawInput;
use super::vector::FeatureVector;
use crate::logic::schema::FeatureSchema;

/// Candidate columns for the direct numeric fields, priority order
const TENURE_COLUMNS: &[&str] = &["tenure"];
const MONTHLY_CHARGES_COLUMNS: &[&str] = &["monthlycharges", "MonthlyCharges"];
const TOTAL_CHARGES_COLUMNS: &[&str] = &["totalcharges", "TotalCharges"];

/// Advisory diagnostic: a feature group found none of its candidate columns
/// in the schema. The encoding proceeds with the group all-zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDrift {
    /// Logical feature group ("contract", "paymentmethod", ...)
    pub group: String,
    /// The selection that could not be mapped
    pub selection: String,
    /// Candidate columns that were tried, in priority order
    pub candidates: Vec<String>,
}

impl std::fmt::Display for SchemaDrift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "schema drift: no column for {}={:?} (tried: {})",
            self.group,
            self.selection,
            self.candidates.join(", ")
        )
    }
}

/// Encoder output: the vector plus any drift observed while building it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodedInput {
    pub vector: FeatureVector,
    pub drift: Vec<SchemaDrift>,
}

/// Encode one validated customer profile against the schema.
///
/// Deterministic: identical input and schema produce a bit-identical vector.
pub fn encode(raw: &RawInput, schema: &FeatureSchema) -> EncodedInput {
    let mut vector = FeatureVector::zeroed(schema);
    let mut drift = Vec::new();

    // Direct numeric fields. totalcharges is tenure * monthly_charges, a
    // proxy for the true historical billing total the training data had;
    // the real figure is not available at serving time.
    let total_charges = raw.tenure as f32 * raw.monthly_charges;

    set_first_match(
        &mut vector,
        schema,
        &mut drift,
        "tenure",
        &raw.tenure.to_string(),
        TENURE_COLUMNS,
        raw.tenure as f32,
    );
    set_first_match(
        &mut vector,
        schema,
        &mut drift,
        "monthlycharges",
        &raw.monthly_charges.to_string(),
        MONTHLY_CHARGES_COLUMNS,
        raw.monthly_charges,
    );
    set_first_match(
        &mut vector,
        schema,
        &mut drift,
        "totalcharges",
        &total_charges.to_string(),
        TOTAL_CHARGES_COLUMNS,
        total_charges,
    );

    // One-hot flags. A baseline selection has an empty candidate list and
    // leaves its group at zero.
    set_one_hot(&mut vector, schema, &mut drift, "contract", raw.contract.as_str(), raw.contract.encoded_columns());
    set_one_hot(
        &mut vector,
        schema,
        &mut drift,
        "internetservice",
        raw.internet_service.as_str(),
        raw.internet_service.encoded_columns(),
    );
    set_one_hot(
        &mut vector,
        schema,
        &mut drift,
        "paymentmethod",
        raw.payment_method.as_str(),
        raw.payment_method.encoded_columns(),
    );
    set_one_hot(
        &mut vector,
        schema,
        &mut drift,
        "techsupport",
        raw.tech_support.as_str(),
        raw.tech_support.encoded_columns(),
    );
    set_one_hot(
        &mut vector,
        schema,
        &mut drift,
        "paperlessbilling",
        raw.paperless_billing.as_str(),
        raw.paperless_billing.encoded_columns(),
    );

    EncodedInput { vector, drift }
}

/// Set `value` on the first candidate column present in the schema.
/// Records drift when a non-empty candidate list matches nothing.
fn set_first_match(
    vector: &mut FeatureVector,
    schema: &FeatureSchema,
    drift: &mut Vec<SchemaDrift>,
    group: &str,
    selection: &str,
    candidates: &[&str],
    value: f32,
) {
    if candidates.is_empty() {
        // Baseline category: the all-zero group is the encoding
        return;
    }

    for name in candidates {
        if vector.set_by_name(schema, name, value) {
            return;
        }
    }

    drift.push(SchemaDrift {
        group: group.to_string(),
        selection: selection.to_string(),
        candidates: candidates.iter().map(|c| c.to_string()).collect(),
    });
}

fn set_one_hot(
    vector: &mut FeatureVector,
    schema: &FeatureSchema,
    drift: &mut Vec<SchemaDrift>,
    group: &str,
    selection: &str,
    candidates: &[&str],
) {
    set_first_match(vector, schema, drift, group, selection, candidates, 1.0);
}
