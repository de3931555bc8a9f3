use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};

use crate::common::{AgencyId, ProviderId};

/// Provider model - a childcare facility or service in the directory
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Provider {
    pub id: ProviderId,

    // Profile
    pub name: String,
    pub provider_type: String,
    pub description: String,
    pub image: String,
    pub tags: Vec<String>,

    // Reputation
    pub rating: f64,
    pub reviews: i32,

    // Location
    pub location: String,

    // Capacity (spots_available is not bounded by max_capacity)
    pub spots_available: i32,
    pub max_capacity: i32,
    pub ages_served: Vec<String>,

    // Services
    pub meals_provided: bool,
    pub snack_provided: bool,
    pub registered_with_city: bool,

    // Back-reference for lookups; the agency does not live in this row
    pub agency_id: Option<AgencyId>,
}

/// Input for creating a new provider
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateProvider {
    pub name: String,
    #[serde(rename = "type")]
    pub provider_type: String,
    pub rating: f64,
    pub reviews: i32,
    pub location: String,
    pub spots_available: i32,
    pub max_capacity: i32,
    pub ages_served: Vec<String>,
    pub meals_provided: bool,
    pub snack_provided: bool,
    pub registered_with_city: bool,
    pub image: String,
    pub tags: Vec<String>,
    pub description: String,
}

const SELECT_PROVIDER: &str = r#"
    SELECT id, name, provider_type, description, image, tags, rating, reviews,
           location, spots_available, max_capacity, ages_served,
           meals_provided, snack_provided, registered_with_city, agency_id
    FROM providers
"#;

impl Provider {
    /// Find all providers in insertion order
    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(&format!("{SELECT_PROVIDER} ORDER BY id"))
            .fetch_all(pool)
            .await
    }

    /// Find provider by ID, returning None if not found
    pub async fn find_by_id_optional(id: ProviderId, pool: &PgPool) -> sqlx::Result<Option<Self>> {
        sqlx::query_as::<_, Self>(&format!("{SELECT_PROVIDER} WHERE id = $1"))
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find providers owned by any of the given agencies
    pub async fn find_by_agency_ids(
        agency_ids: &[AgencyId],
        pool: &PgPool,
    ) -> sqlx::Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(&format!(
            "{SELECT_PROVIDER} WHERE agency_id = ANY($1) ORDER BY id"
        ))
        .bind(agency_ids)
        .fetch_all(pool)
        .await
    }

    /// Check that a provider row exists and hold a key-share lock on it
    /// until the transaction ends, so it cannot be deleted underneath an
    /// insert that references it.
    pub async fn lock_for_reference(
        id: ProviderId,
        tx: &mut Transaction<'_, Postgres>,
    ) -> sqlx::Result<bool> {
        let row: Option<(ProviderId,)> =
            sqlx::query_as("SELECT id FROM providers WHERE id = $1 FOR KEY SHARE")
                .bind(id)
                .fetch_optional(&mut **tx)
                .await?;
        Ok(row.is_some())
    }

    /// Count all providers
    pub async fn count(pool: &PgPool) -> sqlx::Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM providers")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Create a new provider, optionally owned by an agency
    pub async fn create<'e, E>(
        input: &CreateProvider,
        agency_id: Option<AgencyId>,
        executor: E,
    ) -> sqlx::Result<Self>
    where
        E: sqlx::Executor<'e, Database = Postgres>,
    {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO providers (
                name, provider_type, rating, reviews, location,
                spots_available, max_capacity, ages_served,
                meals_provided, snack_provided, registered_with_city,
                image, tags, description, agency_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING id, name, provider_type, description, image, tags, rating, reviews,
                      location, spots_available, max_capacity, ages_served,
                      meals_provided, snack_provided, registered_with_city, agency_id
            "#,
        )
        .bind(&input.name)
        .bind(&input.provider_type)
        .bind(input.rating)
        .bind(input.reviews)
        .bind(&input.location)
        .bind(input.spots_available)
        .bind(input.max_capacity)
        .bind(&input.ages_served)
        .bind(input.meals_provided)
        .bind(input.snack_provided)
        .bind(input.registered_with_city)
        .bind(&input.image)
        .bind(&input.tags)
        .bind(&input.description)
        .bind(agency_id)
        .fetch_one(executor)
        .await
    }
}
