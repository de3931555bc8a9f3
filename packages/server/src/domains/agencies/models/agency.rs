use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres};

use crate::common::AgencyId;

/// Agency model - an organization managing one or more providers
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Agency {
    pub id: AgencyId,
    pub name: String,
    pub phone: String,
    pub email: String,
}

/// Input for creating a new agency
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAgency {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

impl Agency {
    /// Find all agencies in insertion order
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>("SELECT id, name, phone, email FROM agencies ORDER BY id")
            .fetch_all(pool)
            .await
    }

    /// Count all agencies
    pub async fn count(pool: &PgPool) -> sqlx::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM agencies")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Create a new agency. Names are unique; a duplicate fails with a
    /// database constraint error.
    pub async fn create<'e, E>(input: &CreateAgency, executor: E) -> sqlx::Result<Self>
    where
        E: sqlx::Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO agencies (name, phone, email)
            VALUES ($1, $2, $3)
            RETURNING id, name, phone, email
            "#,
        )
        .bind(&input.name)
        .bind(&input.phone)
        .bind(&input.email)
        .fetch_one(executor)
        .await
    }
}
