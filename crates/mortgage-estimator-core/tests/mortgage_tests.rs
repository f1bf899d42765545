use mortgage_estimator_core::mortgage::{amortization, validation};
use mortgage_estimator_core::{
    CalculationError, FieldErrorKind, MortgageError, MortgageField, MortgageInput, MortgageResult,
    MortgageType,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn raw(amount: f64, years: f64, interest_rate: f64, mortgage_type: &str) -> validation::RawMortgageInput {
    validation::RawMortgageInput {
        amount,
        years,
        interest_rate,
        mortgage_type: mortgage_type.into(),
    }
}

fn priced(amount: f64, years: f64, rate: f64, mortgage_type: &str) -> (MortgageInput, MortgageResult) {
    let input = validation::validate(&raw(amount, years, rate, mortgage_type)).unwrap();
    let result = amortization::calculate(&input).unwrap();
    (input, result)
}

// ===========================================================================
// Worked examples
// ===========================================================================

#[test]
fn test_repayment_300k_25y_525() {
    let (_, r) = priced(300_000.0, 25.0, 5.25, "repayment");
    assert_eq!(
        r,
        MortgageResult {
            monthly_payment: dec!(1797.74),
            total_payment: dec!(539322.94),
            interest_total: dec!(239322.94),
        }
    );
}

#[test]
fn test_interest_only_300k_25y_525() {
    let (_, r) = priced(300_000.0, 25.0, 5.25, "interest-only");
    assert_eq!(
        r,
        MortgageResult {
            monthly_payment: dec!(1312.50),
            total_payment: dec!(693750.00),
            interest_total: dec!(393750.00),
        }
    );
}

#[test]
fn test_repayment_200k_30y_45() {
    let (_, r) = priced(200_000.0, 30.0, 4.5, "repayment");
    assert_eq!(r.monthly_payment, dec!(1013.37));
    assert_eq!(r.total_payment, dec!(364813.42));
    assert_eq!(r.interest_total, dec!(164813.42));
}

#[test]
fn test_extremes_of_validator_range() {
    let (_, low) = priced(1_000.0, 5.0, 0.1, "repayment");
    assert_eq!(low.monthly_payment, dec!(16.71));
    assert_eq!(low.total_payment, dec!(1002.54));
    assert_eq!(low.interest_total, dec!(2.54));

    let (_, high) = priced(10_000_000.0, 35.0, 15.0, "repayment");
    assert_eq!(high.monthly_payment, dec!(125681.33));
    assert_eq!(high.total_payment, dec!(52786158.51));
    assert_eq!(high.interest_total, dec!(42786158.51));
}

// ===========================================================================
// Identities
// ===========================================================================

#[test]
fn test_repayment_identities() {
    for (amount, years, rate) in [
        (1_000.0, 5.0, 0.1),
        (85_000.0, 12.0, 2.99),
        (300_000.0, 25.0, 5.25),
        (640_000.0, 35.0, 7.8),
        (10_000_000.0, 35.0, 15.0),
    ] {
        let (input, r) = priced(amount, years, rate, "repayment");
        let n = Decimal::from(input.years * 12);

        // Payment is rounded independently, so allow half a penny per instalment
        let drift = (r.monthly_payment * n - r.total_payment).abs();
        assert!(drift <= dec!(0.005) * n, "drift {drift} for {input:?}");

        assert_eq!(r.interest_total, r.total_payment - input.amount);
    }
}

#[test]
fn test_interest_only_identities() {
    for (amount, years, rate) in [(50_000.0, 10.0, 2.0), (300_000.0, 25.0, 5.25), (999_999.99, 35.0, 14.99)] {
        let (input, r) = priced(amount, years, rate, "interest-only");
        let expected = input.amount * input.interest_rate / dec!(100) / dec!(12);

        assert!((r.monthly_payment - expected).abs() <= dec!(0.005));
        assert_eq!(r.total_payment, r.interest_total + input.amount);
    }
}

// ===========================================================================
// Behaviour across inputs
// ===========================================================================

#[test]
fn test_higher_rate_costs_more() {
    for mortgage_type in [MortgageType::Repayment, MortgageType::InterestOnly] {
        let mut previous: Option<MortgageResult> = None;
        for bp in (50..=1500).step_by(50) {
            let input = MortgageInput {
                amount: dec!(250_000),
                years: 25,
                interest_rate: Decimal::new(bp, 2),
                mortgage_type,
            };
            let r = amortization::calculate(&input).unwrap();
            if let Some(p) = &previous {
                assert!(r.monthly_payment > p.monthly_payment, "{mortgage_type} at {bp}bp");
                assert!(r.interest_total > p.interest_total, "{mortgage_type} at {bp}bp");
            }
            previous = Some(r);
        }
    }
}

#[test]
fn test_calculate_is_repeatable() {
    let input = validation::validate(&raw(412_345.67, 27.0, 6.13, "repayment")).unwrap();
    let first = amortization::calculate(&input).unwrap();
    let second = amortization::calculate(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_calculate_from_many_threads() {
    let input = validation::validate(&raw(300_000.0, 25.0, 5.25, "repayment")).unwrap();
    let expected = amortization::calculate(&input).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let input = input.clone();
            std::thread::spawn(move || amortization::calculate(&input).unwrap())
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

// ===========================================================================
// Boundaries and failures
// ===========================================================================

#[test]
fn test_boundary_values() {
    assert!(validation::validate(&raw(999.0, 25.0, 5.0, "repayment")).is_err());
    assert!(validation::validate(&raw(1_000.0, 25.0, 5.0, "repayment")).is_ok());
    assert!(validation::validate(&raw(50_000.0, 4.0, 5.0, "repayment")).is_err());
    assert!(validation::validate(&raw(50_000.0, 5.0, 5.0, "repayment")).is_ok());
    assert!(validation::validate(&raw(50_000.0, 25.0, 15.01, "repayment")).is_err());
    assert!(validation::validate(&raw(50_000.0, 25.0, 15.0, "repayment")).is_ok());
}

#[test]
fn test_slider_range_is_not_binding() {
    // Above the £1m slider ceiling but inside the validator's range
    let (input, r) = priced(2_500_000.0, 25.0, 5.0, "repayment");
    assert_eq!(input.amount, dec!(2_500_000));
    assert!(r.monthly_payment > Decimal::ZERO);
}

#[test]
fn test_engine_rejects_unvalidated_zero_rate() {
    let input = MortgageInput {
        amount: dec!(100_000),
        years: 25,
        interest_rate: Decimal::ZERO,
        mortgage_type: MortgageType::Repayment,
    };
    match amortization::calculate(&input) {
        Err(CalculationError::InvalidParameters { reason }) => {
            assert!(reason.contains("interest rate"));
        }
        other => panic!("Expected InvalidParameters, got {other:?}"),
    }
}

#[test]
fn test_estimate_reports_every_field() {
    let err = amortization::estimate(&raw(0.0, 0.0, 0.0, "")).unwrap_err();
    match err {
        MortgageError::Validation(errors) => {
            assert_eq!(errors.len(), 4);
            let fields: Vec<MortgageField> = errors.iter().map(|e| e.field).collect();
            assert_eq!(
                fields,
                vec![
                    MortgageField::Amount,
                    MortgageField::Years,
                    MortgageField::InterestRate,
                    MortgageField::MortgageType,
                ]
            );
            assert_eq!(
                errors.get(MortgageField::MortgageType).map(|e| e.kind.clone()),
                Some(FieldErrorKind::UnknownVariant(String::new()))
            );
        }
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_estimate_from_json() {
    let json = r#"{"amount": 300000, "years": 25, "interest_rate": 5.25, "type": "repayment"}"#;
    let input: validation::RawMortgageInput = serde_json::from_str(json).unwrap();
    let out = amortization::estimate(&input).unwrap();

    assert_eq!(out.result.monthly_payment, dec!(1797.74));
    assert_eq!(out.warnings, Vec::<String>::new());
    assert_eq!(out.metadata.precision, "rust_decimal_128bit");
}

#[test]
fn test_field_errors_serialise_with_messages() {
    let errors = validation::validate(&raw(50.0, 25.0, 5.0, "fixed")).unwrap_err();
    let value = serde_json::to_value(&errors).unwrap();

    assert_eq!(
        value,
        serde_json::json!([
            {
                "field": "amount",
                "kind": "below_minimum",
                "message": "Minimum amount is £1,000"
            },
            {
                "field": "type",
                "kind": { "unknown_variant": "fixed" },
                "message": "Unknown mortgage type 'fixed'; expected 'repayment' or 'interest-only'"
            }
        ])
    );
}

#[test]
fn test_field_errors_display_one_per_line() {
    let errors = validation::validate(&raw(50.0, 40.0, 5.0, "repayment")).unwrap_err();
    assert_eq!(
        errors.to_string(),
        "Invalid input in 2 field(s):\n  - amount: Minimum amount is £1,000\n  - years: Maximum term is 35 years"
    );
}
