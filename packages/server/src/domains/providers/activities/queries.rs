//! Provider query actions
//!
//! Providers are read-only through the API.

use tracing::info;

use crate::common::{DirectoryError, DirectoryResult, ProviderId};
use crate::domains::providers::models::Provider;
use crate::kernel::ServerDeps;

/// Get all providers, unfiltered
pub async fn list_providers(deps: &ServerDeps) -> DirectoryResult<Vec<Provider>> {
    info!("Listing providers");

    Ok(Provider::find_all(&deps.db_pool).await?)
}

/// Get a single provider by ID
pub async fn get_provider(provider_id: ProviderId, deps: &ServerDeps) -> DirectoryResult<Provider> {
    info!(provider_id = %provider_id, "Getting provider");

    Provider::find_by_id_optional(provider_id, &deps.db_pool)
        .await?
        .ok_or_else(|| DirectoryError::not_found("Provider", provider_id))
}
