//! Contact service layer - business logic for the message inbox

use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use validator::Validate;

use crate::error::{ApiError, ApiResult};
use crate::models::{page_bounds, PaginatedResponse};
use crate::notification::Notifier;

use super::model::{ContactListQuery, ContactMessage, SubmitContactRequest};

/// Service managing the contact message inbox
#[derive(Clone)]
pub struct ContactService {
    db_pool: PgPool,
    notifier: Arc<Notifier>,
}

impl ContactService {
    pub fn new(db_pool: PgPool, notifier: Arc<Notifier>) -> Self {
        Self { db_pool, notifier }
    }

    /// Store a public submission (unread by default) and fire sender
    /// confirmation plus admin notification without waiting on delivery.
    pub async fn submit(&self, request: SubmitContactRequest) -> ApiResult<ContactMessage> {
        request.validate()?;

        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, phone, subject, message, is_read, created_at)
            VALUES ($1, $2, $3, $4, $5, false, $6)
            RETURNING *
            "#,
        )
        .bind(&request.name)
        .bind(&request.email)
        .bind(&request.phone)
        .bind(&request.subject)
        .bind(&request.message)
        .bind(Utc::now())
        .fetch_one(&self.db_pool)
        .await?;

        let notifier = self.notifier.clone();
        let saved = message.clone();
        tokio::spawn(async move {
            notifier.contact_message_received(&saved).await;
        });

        Ok(message)
    }

    pub async fn get_by_id(&self, id: i64) -> ApiResult<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>("SELECT * FROM contact_messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Message not found with id: {}", id)))
    }

    /// Paginated listing, optionally filtered by read flag. Newest first.
    pub async fn list(&self, query: ContactListQuery) -> ApiResult<PaginatedResponse<ContactMessage>> {
        let (page, limit, offset) = page_bounds(query.page, query.limit);

        let mut count_builder: sqlx::QueryBuilder<sqlx::Postgres> =
            sqlx::QueryBuilder::new("SELECT COUNT(*) FROM contact_messages WHERE 1=1");
        if let Some(is_read) = query.is_read {
            count_builder.push(" AND is_read = ");
            count_builder.push_bind(is_read);
        }

        let (total,): (i64,) = count_builder
            .build_query_as()
            .fetch_one(&self.db_pool)
            .await?;

        let mut query_builder: sqlx::QueryBuilder<sqlx::Postgres> =
            sqlx::QueryBuilder::new("SELECT * FROM contact_messages WHERE 1=1");
        if let Some(is_read) = query.is_read {
            query_builder.push(" AND is_read = ");
            query_builder.push_bind(is_read);
        }
        query_builder.push(" ORDER BY created_at DESC LIMIT ");
        query_builder.push_bind(limit as i64);
        query_builder.push(" OFFSET ");
        query_builder.push_bind(offset);

        let messages = query_builder
            .build_query_as::<ContactMessage>()
            .fetch_all(&self.db_pool)
            .await?;

        Ok(PaginatedResponse {
            data: messages,
            total,
            page,
            limit,
        })
    }

    pub async fn list_unread(&self) -> ApiResult<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages WHERE is_read = false ORDER BY created_at DESC",
        )
        .fetch_all(&self.db_pool)
        .await?;

        Ok(messages)
    }

    pub async fn count_unread(&self) -> ApiResult<i64> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM contact_messages WHERE is_read = false")
                .fetch_one(&self.db_pool)
                .await?;

        Ok(count)
    }

    /// Case-insensitive substring search over subjects
    pub async fn search_by_subject(&self, subject: &str) -> ApiResult<Vec<ContactMessage>> {
        let pattern = format!("%{}%", subject);

        let messages = sqlx::query_as::<_, ContactMessage>(
            "SELECT * FROM contact_messages WHERE subject ILIKE $1 ORDER BY created_at DESC",
        )
        .bind(pattern)
        .fetch_all(&self.db_pool)
        .await?;

        Ok(messages)
    }

    pub async fn mark_read(&self, id: i64) -> ApiResult<ContactMessage> {
        self.set_read_flag(id, true).await
    }

    pub async fn mark_unread(&self, id: i64) -> ApiResult<ContactMessage> {
        self.set_read_flag(id, false).await
    }

    async fn set_read_flag(&self, id: i64, is_read: bool) -> ApiResult<ContactMessage> {
        sqlx::query_as::<_, ContactMessage>(
            "UPDATE contact_messages SET is_read = $1 WHERE id = $2 RETURNING *",
        )
        .bind(is_read)
        .bind(id)
        .fetch_optional(&self.db_pool)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Message not found with id: {}", id)))
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.db_pool)
            .await?;

        Ok(())
    }
}
