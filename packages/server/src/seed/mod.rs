//! Directory seeding
//!
//! Agencies and providers are never written through the HTTP API. They are
//! loaded from a JSON document shaped like:
//!
//! ```json
//! {
//!   "agencies": [
//!     { "name": "Sunrise Daycare", "phone": "555-0100", "email": "hi@sunrise.example",
//!       "providers": [ { "name": "Sunrise Center", "type": "Daycare Center" } ] }
//!   ],
//!   "providers": [ { "name": "Maple Home Care", "type": "Home Daycare" } ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use tracing::info;

use crate::common::DirectoryResult;
use crate::domains::agencies::models::{Agency, CreateAgency};
use crate::domains::providers::models::{CreateProvider, Provider};
use crate::domains::waitlist::models::WaitlistEntry;

/// An agency together with the providers it owns
#[derive(Debug, Clone, Deserialize)]
pub struct AgencySeed {
    #[serde(flatten)]
    pub agency: CreateAgency,
    #[serde(default)]
    pub providers: Vec<CreateProvider>,
}

/// Top-level seed document
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DirectorySeed {
    #[serde(default)]
    pub agencies: Vec<AgencySeed>,
    /// Providers without an agency
    #[serde(default)]
    pub providers: Vec<CreateProvider>,
}

/// What a seed run inserted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub agencies: usize,
    pub providers: usize,
}

/// Row counts per table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableCounts {
    pub agencies: i64,
    pub providers: i64,
    pub waitlist: i64,
}

/// Insert the whole document in one transaction; any failure (a duplicate
/// agency name, for one) leaves the tables untouched.
pub async fn load(seed: &DirectorySeed, pool: &PgPool) -> DirectoryResult<SeedSummary> {
    let mut tx = pool.begin().await?;
    let mut summary = SeedSummary::default();

    for entry in &seed.agencies {
        let agency = Agency::create(&entry.agency, &mut *tx).await?;
        summary.agencies += 1;
        info!(agency_id = %agency.id, name = %agency.name, "Seeded agency");

        for provider in &entry.providers {
            Provider::create(provider, Some(agency.id), &mut *tx).await?;
            summary.providers += 1;
        }
    }

    for provider in &seed.providers {
        Provider::create(provider, None, &mut *tx).await?;
        summary.providers += 1;
    }

    tx.commit().await?;

    info!(
        agencies = summary.agencies,
        providers = summary.providers,
        "Seed loaded"
    );

    Ok(summary)
}

pub async fn counts(pool: &PgPool) -> DirectoryResult<TableCounts> {
    Ok(TableCounts {
        agencies: Agency::count(pool).await?,
        providers: Provider::count(pool).await?,
        waitlist: WaitlistEntry::count(pool).await?,
    })
}
