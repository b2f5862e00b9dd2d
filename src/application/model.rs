//! Loan application models

use chrono::{DateTime, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Review workflow status of a loan application
#[derive(Debug, Serialize, Deserialize, sqlx::Type, Clone, Copy, PartialEq, Eq)]
#[sqlx(type_name = "application_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    UnderReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "PENDING",
            ApplicationStatus::UnderReview => "UNDER_REVIEW",
            ApplicationStatus::Approved => "APPROVED",
            ApplicationStatus::Rejected => "REJECTED",
        }
    }
}

/// Loan application model
///
/// `loan_type` is a free-text snapshot of the catalog entry name at submission
/// time, not a foreign key, so later catalog edits never touch stored
/// applications.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct LoanApplication {
    pub id: i64,
    pub application_id: String,

    // Personal information
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,

    // Address information
    pub current_address: String,
    pub permanent_address: Option<String>,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub residence_type: Option<String>,
    pub years_at_current_address: Option<i32>,

    // Employment information
    pub employment_type: String,
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub work_experience: Option<i32>,
    pub monthly_income: i64,
    pub additional_income: Option<i64>,
    pub official_email: Option<String>,
    pub office_address: Option<String>,

    // Loan details
    pub loan_type: String,
    pub loan_amount: i64,
    pub loan_purpose: String,
    pub preferred_tenure: i32,
    pub existing_loans: Option<String>,
    pub bank_account: Option<String>,
    pub ifsc_code: Option<String>,

    // Review workflow
    pub status: ApplicationStatus,
    pub reviewed_by: Option<String>,
    pub review_comments: Option<String>,
    pub reviewed_at: Option<DateTime<Utc>>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LoanApplication {
    /// Reduced view exposed on the public status-check endpoint.
    pub fn public_view(&self) -> PublicApplicationStatus {
        PublicApplicationStatus {
            application_id: self.application_id.clone(),
            status: self.status,
            loan_type: self.loan_type.clone(),
            loan_amount: self.loan_amount,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Request DTO for submitting a loan application
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitApplicationRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    pub last_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,

    #[validate(length(min = 1, message = "Current address is required"))]
    pub current_address: String,
    pub permanent_address: Option<String>,
    #[validate(length(min = 1, message = "City is required"))]
    pub city: String,
    #[validate(length(min = 1, message = "State is required"))]
    pub state: String,
    #[validate(length(min = 1, message = "Pincode is required"))]
    pub pincode: String,
    pub residence_type: Option<String>,
    pub years_at_current_address: Option<i32>,

    #[validate(length(min = 1, message = "Employment type is required"))]
    pub employment_type: String,
    pub company_name: Option<String>,
    pub designation: Option<String>,
    pub work_experience: Option<i32>,
    #[validate(range(min = 1, message = "Monthly income must be positive"))]
    pub monthly_income: i64,
    pub additional_income: Option<i64>,
    pub official_email: Option<String>,
    pub office_address: Option<String>,

    #[validate(length(min = 1, message = "Loan type is required"))]
    pub loan_type: String,
    #[validate(range(min = 1, message = "Loan amount must be positive"))]
    pub loan_amount: i64,
    #[validate(length(min = 1, message = "Loan purpose is required"))]
    pub loan_purpose: String,
    #[validate(range(min = 1, message = "Preferred tenure must be positive"))]
    pub preferred_tenure: i32,
    pub existing_loans: Option<String>,
    pub bank_account: Option<String>,
    pub ifsc_code: Option<String>,
}

/// Request DTO for an admin status update
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: ApplicationStatus,
    pub reviewed_by: String,
    pub comments: Option<String>,
}

/// Query parameters for searching applications
#[derive(Debug, Deserialize)]
pub struct ApplicationSearchQuery {
    pub status: Option<ApplicationStatus>,
    pub search: Option<String>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
}

/// Public projection of an application: everything personal, employment or
/// review related is stripped before the record leaves the admin boundary.
#[derive(Debug, Serialize)]
pub struct PublicApplicationStatus {
    pub application_id: String,
    pub status: ApplicationStatus,
    pub loan_type: String,
    pub loan_amount: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-loan-type application count
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct LoanTypeCount {
    pub loan_type: String,
    pub count: i64,
}

/// Aggregate reporting bundle for the admin dashboard
#[derive(Debug, Serialize)]
pub struct ApplicationStats {
    pub pending: i64,
    pub under_review: i64,
    pub approved: i64,
    pub rejected: i64,
    pub today: i64,
    pub this_week: i64,
    pub this_month: i64,
    pub by_loan_type: Vec<LoanTypeCount>,
}

/// Generate a human-facing application id: `RSF` prefix, millisecond
/// timestamp and a random 4-digit suffix. The random tail plus the UNIQUE
/// constraint on the column keeps concurrent submissions within the same
/// millisecond from colliding silently.
pub fn generate_application_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..10_000);
    format!("RSF{}{:04}", millis, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_id_format() {
        let id = generate_application_id();
        assert!(id.starts_with("RSF"));
        assert!(id[3..].chars().all(|c| c.is_ascii_digit()));
        // 13 timestamp digits + 4 random digits
        assert_eq!(id.len(), 3 + 13 + 4);
    }

    #[test]
    fn test_application_ids_differ() {
        let a = generate_application_id();
        let b = generate_application_id();
        // Random suffix makes same-millisecond collisions vanishingly unlikely
        assert_ne!(a, b);
    }

    #[test]
    fn test_status_as_str() {
        assert_eq!(ApplicationStatus::Pending.as_str(), "PENDING");
        assert_eq!(ApplicationStatus::UnderReview.as_str(), "UNDER_REVIEW");
        assert_eq!(ApplicationStatus::Approved.as_str(), "APPROVED");
        assert_eq!(ApplicationStatus::Rejected.as_str(), "REJECTED");
    }
}
