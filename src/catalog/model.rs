//! Loan type catalog models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A loan product definition. Applications snapshot the name as free text,
/// so editing or deleting an entry never rewrites submitted applications.
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct LoanType {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub interest_rate: f64,
    pub max_amount: i64,
    pub min_tenure: i32,
    pub max_tenure: i32,
    pub processing_fee: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating or overwriting a catalog entry
#[derive(Debug, Deserialize, Validate)]
pub struct LoanTypeRequest {
    #[validate(length(min = 1, message = "Loan type name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    #[validate(range(min = 0.01, message = "Interest rate must be positive"))]
    pub interest_rate: f64,
    #[validate(range(min = 1, message = "Maximum amount must be positive"))]
    pub max_amount: i64,
    #[validate(range(min = 1, message = "Minimum tenure must be positive"))]
    pub min_tenure: i32,
    #[validate(range(min = 1, message = "Maximum tenure must be positive"))]
    pub max_tenure: i32,
    #[validate(range(min = 0.0, message = "Processing fee must not be negative"))]
    pub processing_fee: f64,
    pub is_active: Option<bool>,
}
