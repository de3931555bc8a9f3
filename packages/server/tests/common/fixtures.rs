//! Test fixtures for creating directory data.
//!
//! These fixtures use the model methods directly, the same path the seed
//! loader takes.

use anyhow::Result;
use childcare_core::common::{AgencyId, ProviderId};
use childcare_core::domains::agencies::models::{Agency, CreateAgency};
use childcare_core::domains::providers::models::{CreateProvider, Provider};
use childcare_core::domains::waitlist::models::CreateWaitlistEntry;
use sqlx::PgPool;

/// Create an agency with placeholder contact details
pub async fn create_test_agency(pool: &PgPool, name: &str) -> Result<AgencyId> {
    let agency = Agency::create(
        &CreateAgency {
            name: name.to_string(),
            phone: "555-0100".to_string(),
            email: "office@agency.example".to_string(),
        },
        pool,
    )
    .await?;

    Ok(agency.id)
}

pub fn provider_input(name: &str) -> CreateProvider {
    CreateProvider {
        name: name.to_string(),
        provider_type: "Daycare Center".to_string(),
        rating: 4.5,
        reviews: 18,
        location: "Downtown".to_string(),
        spots_available: 2,
        max_capacity: 24,
        ages_served: vec!["Infant".to_string(), "Preschool".to_string()],
        meals_provided: true,
        snack_provided: true,
        registered_with_city: true,
        image: "/images/provider.jpg".to_string(),
        tags: vec!["Outdoor Play".to_string()],
        description: "A warm, play-based program.".to_string(),
    }
}

/// Create a provider, optionally owned by an agency
pub async fn create_test_provider(
    pool: &PgPool,
    name: &str,
    agency_id: Option<AgencyId>,
) -> Result<Provider> {
    Ok(Provider::create(&provider_input(name), agency_id, pool).await?)
}

pub fn waitlist_input(provider_id: ProviderId) -> CreateWaitlistEntry {
    CreateWaitlistEntry {
        parent_names: "Ana & Luis Ortega".to_string(),
        child_name: "Mateo".to_string(),
        child_age: "18 months".to_string(),
        dob_or_due_date: "2024-03-02".to_string(),
        desired_start_month: "September".to_string(),
        desired_start_year: 2026,
        provider_id,
    }
}
