use axum::extract::State;
use axum::Json;

use crate::common::DirectoryResult;
use crate::domains::agencies::activities;
use crate::domains::agencies::data::AgencyData;
use crate::kernel::ServerDeps;

/// GET /agencies
pub async fn list_agencies_handler(
    State(deps): State<ServerDeps>,
) -> DirectoryResult<Json<Vec<AgencyData>>> {
    Ok(Json(activities::list_agencies(&deps).await?))
}
