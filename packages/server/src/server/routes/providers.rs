use axum::extract::State;
use axum::Json;

use crate::common::{DirectoryError, DirectoryResult, ProviderId};
use crate::domains::providers::activities;
use crate::domains::providers::data::ProviderData;
use crate::kernel::ServerDeps;
use crate::server::extract::ApiPath;

/// GET /providers
pub async fn list_providers_handler(
    State(deps): State<ServerDeps>,
) -> DirectoryResult<Json<Vec<ProviderData>>> {
    let providers = activities::list_providers(&deps).await?;
    Ok(Json(providers.into_iter().map(ProviderData::from).collect()))
}

/// GET /providers/{id}
///
/// Any integer is a well-formed id; one beyond the key range simply
/// matches no provider.
pub async fn get_provider_handler(
    State(deps): State<ServerDeps>,
    ApiPath(raw_id): ApiPath<i64>,
) -> DirectoryResult<Json<ProviderData>> {
    let provider_id = ProviderId::from_i64(raw_id)
        .ok_or_else(|| DirectoryError::not_found("Provider", raw_id))?;
    let provider = activities::get_provider(provider_id, &deps).await?;
    Ok(Json(ProviderData::from(provider)))
}
