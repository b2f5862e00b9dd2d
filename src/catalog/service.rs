//! Catalog service layer - business logic for loan type management

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{ApiError, ApiResult};

use super::model::{LoanType, LoanTypeRequest};

/// Service managing the loan type catalog
#[derive(Clone)]
pub struct CatalogService {
    db_pool: PgPool,
}

impl CatalogService {
    pub fn new(db_pool: PgPool) -> Self {
        Self { db_pool }
    }

    /// Active entries only, the public listing. Ordered by name.
    pub async fn list_active(&self) -> ApiResult<Vec<LoanType>> {
        let loan_types = sqlx::query_as::<_, LoanType>(
            "SELECT * FROM loan_types WHERE is_active = true ORDER BY name",
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(loan_types)
    }

    /// Every entry regardless of active flag, the admin listing.
    pub async fn list_all(&self) -> ApiResult<Vec<LoanType>> {
        let loan_types = sqlx::query_as::<_, LoanType>("SELECT * FROM loan_types ORDER BY name")
            .fetch_all(&self.db_pool)
            .await?;

        Ok(loan_types)
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<LoanType> {
        sqlx::query_as::<_, LoanType>("SELECT * FROM loan_types WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Loan type not found with id: {}", id)))
    }

    pub async fn get_by_name(&self, name: &str) -> ApiResult<LoanType> {
        sqlx::query_as::<_, LoanType>("SELECT * FROM loan_types WHERE LOWER(name) = LOWER($1)")
            .bind(name)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Loan type not found: {}", name)))
    }

    pub async fn exists_by_name(&self, name: &str) -> ApiResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM loan_types WHERE LOWER(name) = LOWER($1))",
        )
        .bind(name)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(exists)
    }

    /// True when another entry (any id but `exclude_id`) already uses `name`.
    async fn name_taken_by_other(&self, name: &str, exclude_id: i64) -> ApiResult<bool> {
        let (exists,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM loan_types \
             WHERE LOWER(name) = LOWER($1) AND id <> $2)",
        )
        .bind(name)
        .bind(exclude_id)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(exists)
    }

    /// Create a catalog entry. The name check is advisory; two racing creates
    /// can both pass it, so the unique index on LOWER(name) is the backstop.
    pub async fn create(&self, request: LoanTypeRequest) -> ApiResult<LoanType> {
        request.validate()?;

        if self.exists_by_name(&request.name).await? {
            return Err(ApiError::Conflict(format!(
                "Loan type already exists: {}",
                request.name
            )));
        }

        let now = Utc::now();

        let loan_type = sqlx::query_as::<_, LoanType>(
            r#"
            INSERT INTO loan_types (
                name, description, interest_rate, max_amount,
                min_tenure, max_tenure, processing_fee, is_active,
                created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.interest_rate)
        .bind(request.max_amount)
        .bind(request.min_tenure)
        .bind(request.max_tenure)
        .bind(request.processing_fee)
        .bind(request.is_active.unwrap_or(true))
        .bind(now)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(loan_type)
    }

    /// Full-field overwrite of an existing entry. Renaming onto a name held
    /// by another entry is a conflict, same as on create; the advisory check
    /// here is backstopped by the unique index on LOWER(name).
    pub async fn update(&self, id: i64, request: LoanTypeRequest) -> ApiResult<LoanType> {
        request.validate()?;

        let existing = self.get_by_id(id).await?;

        if self.name_taken_by_other(&request.name, id).await? {
            return Err(ApiError::Conflict(format!(
                "Loan type already exists: {}",
                request.name
            )));
        }

        let loan_type = sqlx::query_as::<_, LoanType>(
            r#"
            UPDATE loan_types
            SET name = $1,
                description = $2,
                interest_rate = $3,
                max_amount = $4,
                min_tenure = $5,
                max_tenure = $6,
                processing_fee = $7,
                is_active = $8,
                updated_at = $9
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.description)
        .bind(request.interest_rate)
        .bind(request.max_amount)
        .bind(request.min_tenure)
        .bind(request.max_tenure)
        .bind(request.processing_fee)
        .bind(request.is_active.unwrap_or(existing.is_active))
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&self.db_pool)
        .await?;

        Ok(loan_type)
    }

    /// Flip the active flag. A missing id is a no-op, not an error.
    pub async fn toggle_active(&self, id: i64) -> ApiResult<Option<LoanType>> {
        let loan_type = sqlx::query_as::<_, LoanType>(
            "UPDATE loan_types SET is_active = NOT is_active, updated_at = $1 \
             WHERE id = $2 RETURNING *",
        )
        .bind(Utc::now())
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?;

        Ok(loan_type)
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM loan_types WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }
}
