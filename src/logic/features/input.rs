//! Raw Customer Input
//!
//! The per-request customer profile as entered at the input surface, plus the
//! mapping from each categorical selection to its candidate encoded columns.
//!
//! ## Baseline-omitted encoding (correctness-critical)
//! The training pipeline one-hot encoded categoricals with the reference
//! category dropped. A baseline selection therefore maps to NO column at all:
//! its entire group stays zero. The baselines below (month-to-month contract,
//! DSL internet, bank-transfer payment, paperless No, tech-support Yes) must
//! exactly mirror the categories dropped during training. A mismatch silently
//! produces wrong predictions with no error signal.
//!
//! ## Candidate lists
//! Different training runs emitted the encoded columns with different casing
//! (`contract_One year` vs `Contract_One year`). Each selection carries a
//! prioritized list of candidate names; the encoder sets the first one
//! present in the schema. The lists can hold any number of variants.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Tenure domain upper bound (months)
pub const MAX_TENURE_MONTHS: u32 = 72;

/// Monthly charges domain upper bound ($)
pub const MAX_MONTHLY_CHARGES: f32 = 150.0;

// ============================================================================
// CATEGORICAL SELECTIONS
// ============================================================================

/// Contract type. Baseline: month-to-month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl Contract {
    pub fn as_str(&self) -> &'static str {
        match self {
            Contract::MonthToMonth => "Month-to-month",
            Contract::OneYear => "One year",
            Contract::TwoYear => "Two year",
        }
    }

    /// Candidate encoded columns, in priority order. Empty = baseline.
    pub fn encoded_columns(&self) -> &'static [&'static str] {
        match self {
            Contract::MonthToMonth => &[],
            Contract::OneYear => &["contract_One year", "Contract_One year"],
            Contract::TwoYear => &["contract_Two year", "Contract_Two year"],
        }
    }
}

/// Internet service. Baseline: DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "Fiber optic")]
    FiberOptic,
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "No")]
    No,
}

impl InternetService {
    pub fn as_str(&self) -> &'static str {
        match self {
            InternetService::FiberOptic => "Fiber optic",
            InternetService::Dsl => "DSL",
            InternetService::No => "No",
        }
    }

    pub fn encoded_columns(&self) -> &'static [&'static str] {
        match self {
            InternetService::FiberOptic => {
                &["internetservice_Fiber optic", "InternetService_Fiber optic"]
            }
            InternetService::Dsl => &[],
            InternetService::No => &["internetservice_No", "InternetService_No"],
        }
    }
}

/// Payment method. Baseline: bank transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    MailedCheck,
    #[serde(rename = "Bank transfer")]
    BankTransfer,
    #[serde(rename = "Credit card")]
    CreditCard,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::ElectronicCheck => "Electronic check",
            PaymentMethod::MailedCheck => "Mailed check",
            PaymentMethod::BankTransfer => "Bank transfer",
            PaymentMethod::CreditCard => "Credit card",
        }
    }

    pub fn encoded_columns(&self) -> &'static [&'static str] {
        match self {
            PaymentMethod::ElectronicCheck => {
                &["paymentmethod_Electronic check", "PaymentMethod_Electronic check"]
            }
            PaymentMethod::MailedCheck => {
                &["paymentmethod_Mailed check", "PaymentMethod_Mailed check"]
            }
            PaymentMethod::BankTransfer => &[],
            PaymentMethod::CreditCard => &[
                "paymentmethod_Credit card (automatic)",
                "PaymentMethod_Credit card (automatic)",
            ],
        }
    }
}

/// Tech support selection.
///
/// Only "No" maps to an encoded column. "No internet service" intentionally
/// produces an all-zero group, matching training-time behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TechSupport {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
    #[serde(rename = "No internet service")]
    NoInternetService,
}

impl TechSupport {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechSupport::Yes => "Yes",
            TechSupport::No => "No",
            TechSupport::NoInternetService => "No internet service",
        }
    }

    pub fn encoded_columns(&self) -> &'static [&'static str] {
        match self {
            TechSupport::Yes => &[],
            TechSupport::No => &["techsupport_No", "TechSupport_No"],
            TechSupport::NoInternetService => &[],
        }
    }
}

/// Paperless billing. Baseline: No.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperlessBilling {
    #[serde(rename = "Yes")]
    Yes,
    #[serde(rename = "No")]
    No,
}

impl PaperlessBilling {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaperlessBilling::Yes => "Yes",
            PaperlessBilling::No => "No",
        }
    }

    pub fn encoded_columns(&self) -> &'static [&'static str] {
        match self {
            PaperlessBilling::Yes => &["paperlessbilling_Yes", "PaperlessBilling_Yes"],
            PaperlessBilling::No => &[],
        }
    }
}

// ============================================================================
// RAW INPUT
// ============================================================================

/// One customer profile, captured fresh per prediction request.
///
/// Immutable once captured. The encoder assumes the domains below already
/// hold; `validate` enforces them at the input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawInput {
    /// Months with the company, 0-72
    pub tenure: u32,
    /// Current monthly bill ($), 0-150
    pub monthly_charges: f32,
    pub contract: Contract,
    pub internet_service: InternetService,
    pub payment_method: PaymentMethod,
    pub tech_support: TechSupport,
    pub paperless_billing: PaperlessBilling,
}

impl RawInput {
    /// Boundary validation. Call BEFORE encoding; the encoder itself does
    /// no range checks.
    pub fn validate(&self) -> CoreResult<()> {
        if self.tenure > MAX_TENURE_MONTHS {
            return Err(CoreError::InvalidInput(format!(
                "tenure {} exceeds {} months",
                self.tenure, MAX_TENURE_MONTHS
            )));
        }

        if !self.monthly_charges.is_finite() {
            return Err(CoreError::InvalidInput(
                "monthly_charges is not a finite number".to_string(),
            ));
        }

        if self.monthly_charges < 0.0 || self.monthly_charges > MAX_MONTHLY_CHARGES {
            return Err(CoreError::InvalidInput(format!(
                "monthly_charges {} outside [0, {}]",
                self.monthly_charges, MAX_MONTHLY_CHARGES
            )));
        }

        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> RawInput {
        RawInput {
            tenure: 12,
            monthly_charges: 70.0,
            contract: Contract::MonthToMonth,
            internet_service: InternetService::FiberOptic,
            payment_method: PaymentMethod::ElectronicCheck,
            tech_support: TechSupport::No,
            paperless_billing: PaperlessBilling::Yes,
        }
    }

    #[test]
    fn test_validate_accepts_domain() {
        assert!(sample_input().validate().is_ok());

        let mut edge = sample_input();
        edge.tenure = 72;
        edge.monthly_charges = 150.0;
        assert!(edge.validate().is_ok());

        edge.tenure = 0;
        edge.monthly_charges = 0.0;
        assert!(edge.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tenure_overflow() {
        let mut input = sample_input();
        input.tenure = 73;
        assert!(matches!(input.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_charges_out_of_range() {
        let mut input = sample_input();
        input.monthly_charges = 150.01;
        assert!(matches!(input.validate(), Err(CoreError::InvalidInput(_))));

        input.monthly_charges = -0.01;
        assert!(matches!(input.validate(), Err(CoreError::InvalidInput(_))));

        input.monthly_charges = f32::NAN;
        assert!(matches!(input.validate(), Err(CoreError::InvalidInput(_))));
    }

    #[test]
    fn test_baseline_selections_have_no_columns() {
        assert!(Contract::MonthToMonth.encoded_columns().is_empty());
        assert!(InternetService::Dsl.encoded_columns().is_empty());
        assert!(PaymentMethod::BankTransfer.encoded_columns().is_empty());
        assert!(TechSupport::Yes.encoded_columns().is_empty());
        assert!(TechSupport::NoInternetService.encoded_columns().is_empty());
        assert!(PaperlessBilling::No.encoded_columns().is_empty());
    }

    #[test]
    fn test_candidate_priority_order() {
        // Lowercase variant first, capitalized second
        let columns = Contract::TwoYear.encoded_columns();
        assert_eq!(columns, &["contract_Two year", "Contract_Two year"]);
    }

    #[test]
    fn test_serde_labels_round_trip() {
        let json = serde_json::to_string(&InternetService::FiberOptic).unwrap();
        assert_eq!(json, "\"Fiber optic\"");

        let parsed: PaymentMethod = serde_json::from_str("\"Credit card\"").unwrap();
        assert_eq!(parsed, PaymentMethod::CreditCard);
    }
}
