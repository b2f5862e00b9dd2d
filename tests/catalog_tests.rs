//! Loan type catalog request validation tests

use validator::Validate;

use rsfinance_server::catalog::LoanTypeRequest;

fn valid_request() -> LoanTypeRequest {
    serde_json::from_value(serde_json::json!({
        "name": "Personal Loan",
        "description": "Unsecured personal loan for salaried applicants",
        "interest_rate": 12.5,
        "max_amount": 500000,
        "min_tenure": 6,
        "max_tenure": 60,
        "processing_fee": 1.5
    }))
    .expect("valid request json")
}

#[test]
fn test_valid_loan_type_passes() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_blank_name_fails() {
    let mut request = valid_request();
    request.name = String::new();
    assert!(request.validate().is_err());
}

#[test]
fn test_non_positive_rate_fails() {
    let mut request = valid_request();
    request.interest_rate = 0.0;
    assert!(request.validate().is_err());
}

#[test]
fn test_non_positive_bounds_fail() {
    let mut request = valid_request();
    request.max_amount = 0;
    assert!(request.validate().is_err());

    let mut request = valid_request();
    request.min_tenure = 0;
    assert!(request.validate().is_err());

    let mut request = valid_request();
    request.max_tenure = -12;
    assert!(request.validate().is_err());
}

#[test]
fn test_negative_processing_fee_fails() {
    let mut request = valid_request();
    request.processing_fee = -0.5;
    assert!(request.validate().is_err());
}

#[test]
fn test_active_flag_defaults_to_none() {
    let request = valid_request();
    assert!(request.is_active.is_none());
}
