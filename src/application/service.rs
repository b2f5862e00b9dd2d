//! Application service layer - business logic for the loan application lifecycle

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveTime, Utc};
use sqlx::PgPool;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::models::{page_bounds, PaginatedResponse};
use crate::notification::Notifier;

use super::model::{
    generate_application_id, ApplicationSearchQuery, ApplicationStats, ApplicationStatus,
    LoanApplication, LoanTypeCount, SubmitApplicationRequest, UpdateStatusRequest,
};

/// Service managing the loan application lifecycle
#[derive(Clone)]
pub struct ApplicationService {
    db_pool: PgPool,
    notifier: Arc<Notifier>,
}

impl ApplicationService {
    pub fn new(db_pool: PgPool, notifier: Arc<Notifier>) -> Self {
        Self { db_pool, notifier }
    }

    /// Accept a public submission: validate, assign an application id, persist
    /// with status PENDING, then fire confirmation and admin notifications
    /// without waiting on delivery.
    pub async fn submit(&self, request: SubmitApplicationRequest) -> ApiResult<LoanApplication> {
        request.validate()?;

        let application_id = generate_application_id();
        let now = Utc::now();

        let application = sqlx::query_as::<_, LoanApplication>(
            r#"
            INSERT INTO loan_applications (
                application_id,
                first_name, last_name, email, phone, date_of_birth,
                gender, marital_status, father_name, mother_name,
                current_address, permanent_address, city, state, pincode,
                residence_type, years_at_current_address,
                employment_type, company_name, designation, work_experience,
                monthly_income, additional_income, official_email, office_address,
                loan_type, loan_amount, loan_purpose, preferred_tenure,
                existing_loans, bank_account, ifsc_code,
                status, created_at, updated_at
            )
            VALUES (
                $1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                $11, $12, $13, $14, $15, $16, $17, $18, $19, $20,
                $21, $22, $23, $24, $25, $26, $27, $28, $29, $30,
                $31, $32, $33, $34, $35
            )
            RETURNING *
            "#,
        )
        .bind(&application_id)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(request.date_of_birth)
        .bind(&request.gender)
        .bind(&request.marital_status)
        .bind(&request.father_name)
        .bind(&request.mother_name)
        .bind(&request.current_address)
        .bind(&request.permanent_address)
        .bind(&request.city)
        .bind(&request.state)
        .bind(&request.pincode)
        .bind(&request.residence_type)
        .bind(request.years_at_current_address)
        .bind(&request.employment_type)
        .bind(&request.company_name)
        .bind(&request.designation)
        .bind(request.work_experience)
        .bind(request.monthly_income)
        .bind(request.additional_income)
        .bind(&request.official_email)
        .bind(&request.office_address)
        .bind(&request.loan_type)
        .bind(request.loan_amount)
        .bind(&request.loan_purpose)
        .bind(request.preferred_tenure)
        .bind(&request.existing_loans)
        .bind(&request.bank_account)
        .bind(&request.ifsc_code)
        .bind(ApplicationStatus::Pending)
        .bind(now)
        .bind(now)
        .fetch_one(&self.db_pool)
        .await?;

        let notifier = self.notifier.clone();
        let saved = application.clone();
        tokio::spawn(async move {
            notifier.application_submitted(&saved).await;
        });

        Ok(application)
    }

    /// Look up by primary key
    pub async fn get_by_id(&self, id: i64) -> ApiResult<LoanApplication> {
        sqlx::query_as::<_, LoanApplication>("SELECT * FROM loan_applications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Application not found with id: {}", id)))
    }

    /// Look up by the human-facing application id
    pub async fn get_by_application_id(&self, application_id: &str) -> ApiResult<LoanApplication> {
        sqlx::query_as::<_, LoanApplication>(
            "SELECT * FROM loan_applications WHERE application_id = $1",
        )
        .bind(application_id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| {
            ApiError::NotFound(format!("Application not found: {}", application_id))
        })
    }

    /// Filtered, paginated search. A status filter matches exactly; a search
    /// term matches case-insensitively as a substring of first name, last
    /// name or application id. Newest first.
    pub async fn search(
        &self,
        query: ApplicationSearchQuery,
    ) -> ApiResult<PaginatedResponse<LoanApplication>> {
        let (page, limit, offset) = page_bounds(query.page, query.limit);
        let pattern = query.search.as_ref().map(|term| format!("%{}%", term));

        let mut count_builder: sqlx::QueryBuilder<sqlx::Postgres> =
            sqlx::QueryBuilder::new("SELECT COUNT(*) FROM loan_applications WHERE 1=1");
        Self::push_search_filters(&mut count_builder, query.status, pattern.as_deref());

        let (total,): (i64,) = count_builder
            .build_query_as()
            .fetch_one(&self.db_pool)
            .await?;

        let mut query_builder: sqlx::QueryBuilder<sqlx::Postgres> =
            sqlx::QueryBuilder::new("SELECT * FROM loan_applications WHERE 1=1");
        Self::push_search_filters(&mut query_builder, query.status, pattern.as_deref());

        query_builder.push(" ORDER BY created_at DESC LIMIT ");
        query_builder.push_bind(limit as i64);
        query_builder.push(" OFFSET ");
        query_builder.push_bind(offset);

        let applications = query_builder
            .build_query_as::<LoanApplication>()
            .fetch_all(&self.db_pool)
            .await?;

        Ok(PaginatedResponse {
            data: applications,
            total,
            page,
            limit,
        })
    }

    fn push_search_filters(
        builder: &mut sqlx::QueryBuilder<'_, sqlx::Postgres>,
        status: Option<ApplicationStatus>,
        pattern: Option<&str>,
    ) {
        if let Some(status) = status {
            builder.push(" AND status = ");
            builder.push_bind(status);
        }
        if let Some(pattern) = pattern {
            builder.push(" AND (first_name ILIKE ");
            builder.push_bind(pattern.to_string());
            builder.push(" OR last_name ILIKE ");
            builder.push_bind(pattern.to_string());
            builder.push(" OR application_id ILIKE ");
            builder.push_bind(pattern.to_string());
            builder.push(")");
        }
    }

    /// Record a reviewer decision. Any status may transition to any other;
    /// the workflow deliberately imposes no transition graph.
    pub async fn update_status(
        &self,
        id: i64,
        request: UpdateStatusRequest,
    ) -> ApiResult<LoanApplication> {
        let now = Utc::now();

        let application = sqlx::query_as::<_, LoanApplication>(
            r#"
            UPDATE loan_applications
            SET status = $1,
                reviewed_by = $2,
                review_comments = $3,
                reviewed_at = $4,
                updated_at = $4
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(request.status)
        .bind(&request.reviewed_by)
        .bind(&request.comments)
        .bind(now)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Application not found with id: {}", id)))?;

        let notifier = self.notifier.clone();
        let updated = application.clone();
        tokio::spawn(async move {
            notifier.application_status_changed(&updated).await;
        });

        Ok(application)
    }

    /// Hard delete. A missing id is a no-op, matching delete-by-id semantics.
    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM loan_applications WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }

    /// Aggregate counts for the admin dashboard
    pub async fn stats(&self) -> ApiResult<ApplicationStats> {
        let now = Utc::now();
        let start_of_day = now
            .date_naive()
            .and_time(NaiveTime::MIN)
            .and_utc();

        Ok(ApplicationStats {
            pending: self.count_by_status(ApplicationStatus::Pending).await?,
            under_review: self.count_by_status(ApplicationStatus::UnderReview).await?,
            approved: self.count_by_status(ApplicationStatus::Approved).await?,
            rejected: self.count_by_status(ApplicationStatus::Rejected).await?,
            today: self.count_created_after(start_of_day).await?,
            this_week: self.count_created_after(now - Duration::days(7)).await?,
            this_month: self.count_created_after(now - Duration::days(30)).await?,
            by_loan_type: self.counts_by_loan_type().await?,
        })
    }

    pub async fn count_by_status(&self, status: ApplicationStatus) -> ApiResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM loan_applications WHERE status = $1")
                .bind(status)
                .fetch_one(&self.db_pool)
                .await?;

        Ok(count)
    }

    pub async fn count_created_after(&self, instant: DateTime<Utc>) -> ApiResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM loan_applications WHERE created_at >= $1")
                .bind(instant)
                .fetch_one(&self.db_pool)
                .await?;

        Ok(count)
    }

    pub async fn counts_by_loan_type(&self) -> ApiResult<Vec<LoanTypeCount>> {
        let counts = sqlx::query_as::<_, LoanTypeCount>(
            "SELECT loan_type, COUNT(*) AS count FROM loan_applications GROUP BY loan_type",
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(counts)
    }

    /// Applications created inside a closed time window
    pub async fn list_between(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> ApiResult<Vec<LoanApplication>> {
        let applications = sqlx::query_as::<_, LoanApplication>(
            "SELECT * FROM loan_applications WHERE created_at BETWEEN $1 AND $2 \
             ORDER BY created_at DESC",
        )
        .bind(start)
        .bind(end)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(applications)
    }
}
