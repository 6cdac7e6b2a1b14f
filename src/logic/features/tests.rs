//! Integration Tests for the Encoding Pipeline
//!
//! Exercises RawInput -> encode -> FeatureVector against realistic schemas,
//! including casing variants and simulated schema drift.

#[cfg(test)]
mod integration_tests {
    use crate::logic::features::{
        encode,
        input::{Contract, InternetService, PaperlessBilling, PaymentMethod, RawInput, TechSupport},
    };
    use crate::logic::schema::FeatureSchema;

    /// Schema as produced by a lowercase training run
    fn lowercase_schema() -> FeatureSchema {
        FeatureSchema::from_columns(
            [
                "tenure",
                "monthlycharges",
                "totalcharges",
                "contract_One year",
                "contract_Two year",
                "internetservice_Fiber optic",
                "internetservice_No",
                "paymentmethod_Electronic check",
                "paymentmethod_Mailed check",
                "paymentmethod_Credit card (automatic)",
                "techsupport_No",
                "paperlessbilling_Yes",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap()
    }

    /// Schema from a training run that kept the dataset's capitalization
    fn capitalized_schema() -> FeatureSchema {
        FeatureSchema::from_columns(
            [
                "tenure",
                "MonthlyCharges",
                "TotalCharges",
                "Contract_One year",
                "Contract_Two year",
                "InternetService_Fiber optic",
                "InternetService_No",
                "PaymentMethod_Electronic check",
                "PaymentMethod_Mailed check",
                "PaymentMethod_Credit card (automatic)",
                "TechSupport_No",
                "PaperlessBilling_Yes",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap()
    }

    fn scenario_a_input() -> RawInput {
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

    /// Scenario A from the decision-support playbook: month-to-month fiber
    /// customer paying by electronic check
    #[test]
    fn test_scenario_a_encoding() {
        let schema = lowercase_schema();
        let encoded = encode(&scenario_a_input(), &schema);
        let vector = &encoded.vector;

        assert_eq!(vector.get_by_name(&schema, "tenure"), Some(12.0));
        assert_eq!(vector.get_by_name(&schema, "monthlycharges"), Some(70.0));
        assert_eq!(vector.get_by_name(&schema, "totalcharges"), Some(840.0));

        assert_eq!(vector.get_by_name(&schema, "internetservice_Fiber optic"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "paymentmethod_Electronic check"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "techsupport_No"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "paperlessbilling_Yes"), Some(1.0));

        // Month-to-month is the baseline: contract group stays zero
        assert_eq!(vector.get_by_name(&schema, "contract_One year"), Some(0.0));
        assert_eq!(vector.get_by_name(&schema, "contract_Two year"), Some(0.0));

        assert!(encoded.drift.is_empty());
    }

    #[test]
    fn test_total_charges_is_exact_product() {
        let schema = lowercase_schema();

        for tenure in [0u32, 1, 12, 36, 72] {
            for charges in [0.0f32, 29.85, 70.0, 150.0] {
                let mut input = scenario_a_input();
                input.tenure = tenure;
                input.monthly_charges = charges;

                let encoded = encode(&input, &schema);
                assert_eq!(
                    encoded.vector.get_by_name(&schema, "totalcharges"),
                    Some(tenure as f32 * charges),
                    "tenure={} charges={}",
                    tenure,
                    charges
                );
            }
        }
    }

    #[test]
    fn test_capitalized_schema_resolved_via_second_candidate() {
        let schema = capitalized_schema();
        let mut input = scenario_a_input();
        input.contract = Contract::TwoYear;

        let encoded = encode(&input, &schema);
        let vector = &encoded.vector;

        assert_eq!(vector.get_by_name(&schema, "MonthlyCharges"), Some(70.0));
        assert_eq!(vector.get_by_name(&schema, "TotalCharges"), Some(840.0));
        assert_eq!(vector.get_by_name(&schema, "Contract_Two year"), Some(1.0));
        assert_eq!(vector.get_by_name(&schema, "InternetService_Fiber optic"), Some(1.0));
        assert!(encoded.drift.is_empty());
    }

    #[test]
    fn test_at_most_one_flag_per_group() {
        let schema = lowercase_schema();

        let contracts = [Contract::MonthToMonth, Contract::OneYear, Contract::TwoYear];
        let payments = [
            PaymentMethod::ElectronicCheck,
            PaymentMethod::MailedCheck,
            PaymentMethod::BankTransfer,
            PaymentMethod::CreditCard,
        ];

        for contract in contracts {
            for payment in payments {
                let mut input = scenario_a_input();
                input.contract = contract;
                input.payment_method = payment;

                let encoded = encode(&input, &schema);
                let vector = &encoded.vector;

                let contract_flags = ["contract_One year", "contract_Two year"]
                    .iter()
                    .map(|n| vector.get_by_name(&schema, n).unwrap())
                    .sum::<f32>();
                assert!(contract_flags <= 1.0);

                let payment_flags = [
                    "paymentmethod_Electronic check",
                    "paymentmethod_Mailed check",
                    "paymentmethod_Credit card (automatic)",
                ]
                .iter()
                .map(|n| vector.get_by_name(&schema, n).unwrap())
                .sum::<f32>();
                assert!(payment_flags <= 1.0);
            }
        }
    }

    #[test]
    fn test_baseline_selections_leave_groups_zero() {
        let schema = lowercase_schema();
        let input = RawInput {
            tenure: 24,
            monthly_charges: 50.0,
            contract: Contract::MonthToMonth,
            internet_service: InternetService::Dsl,
            payment_method: PaymentMethod::BankTransfer,
            tech_support: TechSupport::Yes,
            paperless_billing: PaperlessBilling::No,
        };

        let encoded = encode(&input, &schema);
        let vector = &encoded.vector;

        for name in [
            "contract_One year",
            "contract_Two year",
            "internetservice_Fiber optic",
            "internetservice_No",
            "paymentmethod_Electronic check",
            "paymentmethod_Mailed check",
            "paymentmethod_Credit card (automatic)",
            "techsupport_No",
            "paperlessbilling_Yes",
        ] {
            assert_eq!(vector.get_by_name(&schema, name), Some(0.0), "{} should be 0", name);
        }

        // Baselines are not drift
        assert!(encoded.drift.is_empty());
    }

    #[test]
    fn test_no_internet_tech_support_is_all_zero_by_design() {
        let schema = lowercase_schema();
        let mut input = scenario_a_input();
        input.internet_service = InternetService::No;
        input.tech_support = TechSupport::NoInternetService;

        let encoded = encode(&input, &schema);
        assert_eq!(encoded.vector.get_by_name(&schema, "techsupport_No"), Some(0.0));
        assert_eq!(encoded.vector.get_by_name(&schema, "internetservice_No"), Some(1.0));
        assert!(encoded.drift.is_empty());
    }

    /// Scenario D: every candidate for a group missing from the schema
    #[test]
    fn test_schema_drift_reported_not_fatal() {
        // A drifted schema with no paymentmethod columns at all
        let schema = FeatureSchema::from_columns(
            [
                "tenure",
                "monthlycharges",
                "totalcharges",
                "internetservice_Fiber optic",
                "techsupport_No",
                "paperlessbilling_Yes",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        )
        .unwrap();

        let encoded = encode(&scenario_a_input(), &schema);

        // Numeric fields and the surviving flags are still set
        assert_eq!(encoded.vector.get_by_name(&schema, "totalcharges"), Some(840.0));
        assert_eq!(
            encoded.vector.get_by_name(&schema, "internetservice_Fiber optic"),
            Some(1.0)
        );

        // The unmappable group is reported, with its candidates
        assert_eq!(encoded.drift.len(), 1);
        let drift = &encoded.drift[0];
        assert_eq!(drift.group, "paymentmethod");
        assert_eq!(drift.selection, "Electronic check");
        assert_eq!(drift.candidates.len(), 2);
    }

    #[test]
    fn test_encode_is_idempotent() {
        let schema = lowercase_schema();
        let input = scenario_a_input();

        let first = encode(&input, &schema);
        let second = encode(&input, &schema);

        assert_eq!(first.vector, second.vector);
        assert_eq!(first.drift, second.drift);
    }
}
