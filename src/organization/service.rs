//! Organization service layer - singleton profile with create-on-read

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::error::ApiResult;

use super::model::{OrganizationInfo, OrganizationInfoRequest, ORGANIZATION_ID};
use super::model::{DEFAULT_SATURDAY_HOURS, DEFAULT_SUNDAY_HOURS, DEFAULT_WEEKDAY_HOURS};

/// Service managing the organization profile record
#[derive(Clone)]
pub struct OrganizationService {
    db_pool: PgPool,
}

impl OrganizationService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Return the profile, synthesizing and persisting the defaults when the
    /// store is empty. This is the only create-on-read path in the system.
    pub async fn get(&self) -> ApiResult<OrganizationInfo> {
        let existing = sqlx::query_as::<_, OrganizationInfo>(
            "SELECT * FROM organization_info WHERE id = $1",
        )
        .bind(ORGANIZATION_ID)
        .fetch_optional(&self.db_pool)
        .await?;

        if let Some(info) = existing {
            return Ok(info);
        }

        tracing::info!("Organization profile missing, persisting defaults");
        self.insert_defaults().await
    }

    /// Overwrite the profile under the fixed key, ignoring any id on input.
    pub async fn update(&self, request: OrganizationInfoRequest) -> ApiResult<OrganizationInfo> {
        request.validate()?;

        let now = Utc::now();

        let info = sqlx::query_as::<_, OrganizationInfo>(
            r#"
            INSERT INTO organization_info (
                id, name, address, phone, email, description,
                established_year, license_number, website, logo_path,
                monday_hours, tuesday_hours, wednesday_hours, thursday_hours,
                friday_hours, saturday_hours, sunday_hours,
                facebook_url, twitter_url, linkedin_url, instagram_url,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21,
                $22, $22
            )
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                address = EXCLUDED.address,
                phone = EXCLUDED.phone,
                email = EXCLUDED.email,
                description = EXCLUDED.description,
                established_year = EXCLUDED.established_year,
                license_number = EXCLUDED.license_number,
                website = EXCLUDED.website,
                logo_path = EXCLUDED.logo_path,
                monday_hours = EXCLUDED.monday_hours,
                tuesday_hours = EXCLUDED.tuesday_hours,
                wednesday_hours = EXCLUDED.wednesday_hours,
                thursday_hours = EXCLUDED.thursday_hours,
                friday_hours = EXCLUDED.friday_hours,
                saturday_hours = EXCLUDED.saturday_hours,
                sunday_hours = EXCLUDED.sunday_hours,
                facebook_url = EXCLUDED.facebook_url,
                twitter_url = EXCLUDED.twitter_url,
                linkedin_url = EXCLUDED.linkedin_url,
                instagram_url = EXCLUDED.instagram_url,
                updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(ORGANIZATION_ID)
        .bind(&request.name)
        .bind(&request.address)
        .bind(&request.phone)
        .bind(&request.email)
        .bind(&request.description)
        .bind(&request.established_year)
        .bind(&request.license_number)
        .bind(&request.website)
        .bind(&request.logo_path)
        .bind(request.monday_hours.as_deref().unwrap_or(DEFAULT_WEEKDAY_HOURS))
        .bind(request.tuesday_hours.as_deref().unwrap_or(DEFAULT_WEEKDAY_HOURS))
        .bind(request.wednesday_hours.as_deref().unwrap_or(DEFAULT_WEEKDAY_HOURS))
        .bind(request.thursday_hours.as_deref().unwrap_or(DEFAULT_WEEKDAY_HOURS))
        .bind(request.friday_hours.as_deref().unwrap_or(DEFAULT_WEEKDAY_HOURS))
        .bind(request.saturday_hours.as_deref().unwrap_or(DEFAULT_SATURDAY_HOURS))
        .bind(request.sunday_hours.as_deref().unwrap_or(DEFAULT_SUNDAY_HOURS))
        .bind(&request.facebook_url)
        .bind(&request.twitter_url)
        .bind(&request.linkedin_url)
        .bind(&request.instagram_url)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(info)
    }

    async fn insert_defaults(&self) -> ApiResult<OrganizationInfo> {
        let defaults = OrganizationInfo::defaults();

        // ON CONFLICT DO NOTHING + re-select keeps two racing first reads
        // from failing: whoever loses the insert reads the winner's row.
        sqlx::query(
            r#"
            INSERT INTO organization_info (
                id, name, address, phone, email, description,
                established_year, license_number, website, logo_path,
                monday_hours, tuesday_hours, wednesday_hours, thursday_hours,
                friday_hours, saturday_hours, sunday_hours,
                facebook_url, twitter_url, linkedin_url, instagram_url,
                created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21,
                $22, $23
            )
            ON CONFLICT (id) DO NOTHING
            "#,
        )
        .bind(defaults.id)
        .bind(&defaults.name)
        .bind(&defaults.address)
        .bind(&defaults.phone)
        .bind(&defaults.email)
        .bind(&defaults.description)
        .bind(&defaults.established_year)
        .bind(&defaults.license_number)
        .bind(&defaults.website)
        .bind(&defaults.logo_path)
        .bind(&defaults.monday_hours)
        .bind(&defaults.tuesday_hours)
        .bind(&defaults.wednesday_hours)
        .bind(&defaults.thursday_hours)
        .bind(&defaults.friday_hours)
        .bind(&defaults.saturday_hours)
        .bind(&defaults.sunday_hours)
        .bind(&defaults.facebook_url)
        .bind(&defaults.twitter_url)
        .bind(&defaults.linkedin_url)
        .bind(&defaults.instagram_url)
        .bind(defaults.created_at)
        .bind(defaults.updated_at)
        .execute(&self.db_pool)
        .await?;

        let info = sqlx::query_as::<_, OrganizationInfo>(
            "SELECT * FROM organization_info WHERE id = $1",
        )
        .bind(ORGANIZATION_ID)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(info)
    }
}
