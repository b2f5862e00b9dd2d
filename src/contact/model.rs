//! Contact message models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Inbound contact message
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// Request DTO for submitting a contact message
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitContactRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, message = "Subject is required"))]
    pub subject: String,
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

/// Query parameters for listing messages
#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
    pub is_read: Option<bool>,
    pub page: Option<i32>,
    pub limit: Option<i32>,
}
