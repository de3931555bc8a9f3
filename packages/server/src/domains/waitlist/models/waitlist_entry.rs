use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};

use crate::common::{ProviderId, WaitlistEntryId};

/// Waitlist entry model - a family's request for a spot with a provider
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct WaitlistEntry {
    pub id: WaitlistEntryId,
    pub parent_names: String,
    pub child_name: String,
    pub child_age: String,
    pub dob_or_due_date: String,
    pub desired_start_month: String,
    pub desired_start_year: i32,
    pub timestamp: DateTime<Utc>,
    pub provider_id: ProviderId,
}

/// Input for creating a new waitlist entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateWaitlistEntry {
    pub parent_names: String,
    pub child_name: String,
    pub child_age: String,
    pub dob_or_due_date: String,
    pub desired_start_month: String,
    pub desired_start_year: i32,
    pub provider_id: ProviderId,
}

impl WaitlistEntry {
    /// Find all waitlist entries in insertion order
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            r#"
            SELECT id, parent_names, child_name, child_age, dob_or_due_date,
                   desired_start_month, desired_start_year, "timestamp", provider_id
            FROM waitlist
            ORDER BY id
            "#,
        )
        .fetch_all(pool)
        .await
    }

    /// Count all waitlist entries
    pub async fn count(pool: &PgPool) -> sqlx::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM waitlist")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Insert a new entry stamped with `timestamp`
    pub async fn create<'e, E>(
        input: &CreateWaitlistEntry,
        timestamp: DateTime<Utc>,
        executor: E,
    ) -> sqlx::Result<Self>
    where
        E: sqlx::Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO waitlist (
                parent_names, child_name, child_age, dob_or_due_date,
                desired_start_month, desired_start_year, "timestamp", provider_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, parent_names, child_name, child_age, dob_or_due_date,
                      desired_start_month, desired_start_year, "timestamp", provider_id
            "#,
        )
        .bind(&input.parent_names)
        .bind(&input.child_name)
        .bind(&input.child_age)
        .bind(&input.dob_or_due_date)
        .bind(&input.desired_start_month)
        .bind(input.desired_start_year)
        .bind(timestamp)
        .bind(input.provider_id)
        .fetch_one(executor)
        .await
    }
}
