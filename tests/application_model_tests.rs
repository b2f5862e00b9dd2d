//! Application intake and projection tests
//!
//! These tests validate submission validation rules, the public status
//! projection, and application id generation.

use chrono::{NaiveDate, Utc};
use validator::Validate;

use rsfinance_server::application::{
    generate_application_id, ApplicationStatus, LoanApplication, SubmitApplicationRequest,
};

fn valid_request() -> SubmitApplicationRequest {
    serde_json::from_value(serde_json::json!({
        "first_name": "Asha",
        "last_name": "Rao",
        "email": "a@x.com",
        "phone": "9999999999",
        "date_of_birth": "1992-04-18",
        "current_address": "12 Lake Road",
        "city": "Kolkata",
        "state": "West Bengal",
        "pincode": "700001",
        "employment_type": "Salaried",
        "monthly_income": 45000,
        "loan_type": "Personal",
        "loan_amount": 50000,
        "loan_purpose": "Medical expenses",
        "preferred_tenure": 12
    }))
    .expect("valid request json")
}

fn sample_application() -> LoanApplication {
    let now = Utc::now();
    LoanApplication {
        id: 1,
        application_id: generate_application_id(),
        first_name: "Asha".to_string(),
        last_name: "Rao".to_string(),
        email: "a@x.com".to_string(),
        phone: "9999999999".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1992, 4, 18).unwrap(),
        gender: None,
        marital_status: None,
        father_name: None,
        mother_name: None,
        current_address: "12 Lake Road".to_string(),
        permanent_address: None,
        city: "Kolkata".to_string(),
        state: "West Bengal".to_string(),
        pincode: "700001".to_string(),
        residence_type: None,
        years_at_current_address: None,
        employment_type: "Salaried".to_string(),
        company_name: None,
        designation: None,
        work_experience: None,
        monthly_income: 45_000,
        additional_income: None,
        official_email: None,
        office_address: None,
        loan_type: "Personal".to_string(),
        loan_amount: 50_000,
        loan_purpose: "Medical expenses".to_string(),
        preferred_tenure: 12,
        existing_loans: None,
        bank_account: Some("1234567890".to_string()),
        ifsc_code: Some("SBIN0000001".to_string()),
        status: ApplicationStatus::Pending,
        reviewed_by: None,
        review_comments: None,
        reviewed_at: None,
        created_at: now,
        updated_at: now,
    }
}

// ============================================================================
// Submission validation
// ============================================================================

#[test]
fn test_valid_request_passes_validation() {
    assert!(valid_request().validate().is_ok());
}

#[test]
fn test_missing_email_fails_validation() {
    let mut request = valid_request();
    request.email = String::new();
    assert!(request.validate().is_err());
}

#[test]
fn test_malformed_email_fails_validation() {
    let mut request = valid_request();
    request.email = "not-an-email".to_string();
    assert!(request.validate().is_err());
}

#[test]
fn test_non_positive_loan_amount_fails_validation() {
    let mut request = valid_request();
    request.loan_amount = 0;
    assert!(request.validate().is_err());

    request.loan_amount = -500;
    assert!(request.validate().is_err());
}

#[test]
fn test_non_positive_income_fails_validation() {
    let mut request = valid_request();
    request.monthly_income = 0;
    assert!(request.validate().is_err());
}

#[test]
fn test_non_positive_tenure_fails_validation() {
    let mut request = valid_request();
    request.preferred_tenure = 0;
    assert!(request.validate().is_err());
}

#[test]
fn test_missing_required_text_fields_fail_validation() {
    for field in [
        "first_name",
        "last_name",
        "phone",
        "current_address",
        "city",
        "state",
        "pincode",
        "employment_type",
        "loan_type",
        "loan_purpose",
    ] {
        let mut request = valid_request();
        match field {
            "first_name" => request.first_name = String::new(),
            "last_name" => request.last_name = String::new(),
            "phone" => request.phone = String::new(),
            "current_address" => request.current_address = String::new(),
            "city" => request.city = String::new(),
            "state" => request.state = String::new(),
            "pincode" => request.pincode = String::new(),
            "employment_type" => request.employment_type = String::new(),
            "loan_type" => request.loan_type = String::new(),
            "loan_purpose" => request.loan_purpose = String::new(),
            _ => unreachable!(),
        }
        assert!(
            request.validate().is_err(),
            "blank {} should fail validation",
            field
        );
    }
}

// ============================================================================
// Application id
// ============================================================================

#[test]
fn test_application_id_has_prefix_and_digits() {
    let id = generate_application_id();
    assert!(id.starts_with("RSF"));
    assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
}

// ============================================================================
// Public projection
// ============================================================================

#[test]
fn test_public_view_keeps_only_safe_fields() {
    let app = sample_application();
    let view = app.public_view();

    assert_eq!(view.application_id, app.application_id);
    assert_eq!(view.status, ApplicationStatus::Pending);
    assert_eq!(view.loan_type, "Personal");
    assert_eq!(view.loan_amount, 50_000);

    let json = serde_json::to_value(&view).expect("serialize projection");
    let object = json.as_object().expect("projection is an object");

    // Exactly the fields the public surface exposes, nothing else
    let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "application_id",
            "created_at",
            "loan_amount",
            "loan_type",
            "status",
            "updated_at",
        ]
    );

    for leaked in ["phone", "email", "monthly_income", "bank_account", "current_address"] {
        assert!(!object.contains_key(leaked), "{} must not leak", leaked);
    }
}

// ============================================================================
// Status serialization
// ============================================================================

#[test]
fn test_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&ApplicationStatus::UnderReview).unwrap(),
        "\"UNDER_REVIEW\""
    );
    assert_eq!(
        serde_json::from_str::<ApplicationStatus>("\"APPROVED\"").unwrap(),
        ApplicationStatus::Approved
    );
}
