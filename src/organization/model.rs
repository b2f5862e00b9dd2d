//! Organization profile models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The singleton key the profile record lives under.
pub const ORGANIZATION_ID: i64 = 1;

/// Organization metadata: contact details, business hours, social links.
/// Exactly one row exists, keyed by [`ORGANIZATION_ID`].
#[derive(Debug, Serialize, Deserialize, sqlx::FromRow, Clone)]
pub struct OrganizationInfo {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub description: Option<String>,
    pub established_year: Option<String>,
    pub license_number: Option<String>,
    pub website: Option<String>,
    pub logo_path: Option<String>,

    // Business hours
    pub monday_hours: String,
    pub tuesday_hours: String,
    pub wednesday_hours: String,
    pub thursday_hours: String,
    pub friday_hours: String,
    pub saturday_hours: String,
    pub sunday_hours: String,

    // Social media
    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_url: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for overwriting the profile. Whatever id the caller sends is
/// ignored; the record always lands under the singleton key.
#[derive(Debug, Deserialize, Validate)]
pub struct OrganizationInfoRequest {
    #[validate(length(min = 1, message = "Organization name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    pub description: Option<String>,
    pub established_year: Option<String>,
    pub license_number: Option<String>,
    pub website: Option<String>,
    pub logo_path: Option<String>,

    pub monday_hours: Option<String>,
    pub tuesday_hours: Option<String>,
    pub wednesday_hours: Option<String>,
    pub thursday_hours: Option<String>,
    pub friday_hours: Option<String>,
    pub saturday_hours: Option<String>,
    pub sunday_hours: Option<String>,

    pub facebook_url: Option<String>,
    pub twitter_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub instagram_url: Option<String>,
}

/// Weekday hours used until an admin sets something else.
pub const DEFAULT_WEEKDAY_HOURS: &str = "9:00 AM - 6:00 PM";
pub const DEFAULT_SATURDAY_HOURS: &str = "9:00 AM - 2:00 PM";
pub const DEFAULT_SUNDAY_HOURS: &str = "Closed";

impl OrganizationInfo {
    /// The record synthesized on first read of an empty store.
    pub fn defaults() -> Self {
        let now = Utc::now();
        Self {
            id: ORGANIZATION_ID,
            name: "RS FINANCE SERVICE".to_string(),
            address: "Nutunhat, Near Indian Oil Petrol Pump, West Bengal".to_string(),
            phone: "8391808557".to_string(),
            email: "info@rsfinanceservice.com".to_string(),
            description: Some(
                "RS Finance Service is a trusted financial services provider offering \
                 comprehensive loan solutions for individuals and businesses. With years \
                 of experience in the industry, we are committed to helping our customers \
                 achieve their financial goals through personalized service and \
                 competitive rates."
                    .to_string(),
            ),
            established_year: Some("2019".to_string()),
            license_number: Some("NBFC-MFI-2019-001".to_string()),
            website: Some("www.rsfinanceservice.com".to_string()),
            logo_path: None,
            monday_hours: DEFAULT_WEEKDAY_HOURS.to_string(),
            tuesday_hours: DEFAULT_WEEKDAY_HOURS.to_string(),
            wednesday_hours: DEFAULT_WEEKDAY_HOURS.to_string(),
            thursday_hours: DEFAULT_WEEKDAY_HOURS.to_string(),
            friday_hours: DEFAULT_WEEKDAY_HOURS.to_string(),
            saturday_hours: DEFAULT_SATURDAY_HOURS.to_string(),
            sunday_hours: DEFAULT_SUNDAY_HOURS.to_string(),
            facebook_url: None,
            twitter_url: None,
            linkedin_url: None,
            instagram_url: None,
            created_at: now,
            updated_at: now,
        }
    }
}
