//! Agency query actions

use std::collections::HashMap;

use tracing::info;

use crate::common::{AgencyId, DirectoryResult};
use crate::domains::agencies::data::AgencyData;
use crate::domains::agencies::models::Agency;
use crate::domains::providers::data::ProviderData;
use crate::domains::providers::models::Provider;
use crate::kernel::ServerDeps;

/// Get all agencies with their providers resolved
///
/// Two queries regardless of agency count: one for agencies, one for every
/// provider that references any of them.
pub async fn list_agencies(deps: &ServerDeps) -> DirectoryResult<Vec<AgencyData>> {
    let agencies = Agency::find_all(&deps.db_pool).await?;

    let agency_ids: Vec<AgencyId> = agencies.iter().map(|agency| agency.id).collect();
    let providers = if agency_ids.is_empty() {
        Vec::new()
    } else {
        Provider::find_by_agency_ids(&agency_ids, &deps.db_pool).await?
    };

    info!(
        agencies = agencies.len(),
        providers = providers.len(),
        "Listing agencies"
    );

    Ok(nest_providers(agencies, providers))
}

/// Attach each provider to the agency it references, preserving order
fn nest_providers(agencies: Vec<Agency>, providers: Vec<Provider>) -> Vec<AgencyData> {
    let mut by_agency: HashMap<AgencyId, Vec<ProviderData>> = HashMap::new();
    for provider in providers {
        if let Some(agency_id) = provider.agency_id {
            by_agency
                .entry(agency_id)
                .or_default()
                .push(ProviderData::from(provider));
        }
    }

    agencies
        .into_iter()
        .map(|agency| {
            let providers = by_agency.remove(&agency.id).unwrap_or_default();
            AgencyData::with_providers(agency, providers)
        })
        .collect()
}
