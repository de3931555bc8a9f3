use axum::extract::State;
use axum::Json;

use crate::common::DirectoryResult;
use crate::domains::waitlist::activities;
use crate::domains::waitlist::data::{WaitlistEntryData, WaitlistEntryInput};
use crate::kernel::ServerDeps;
use crate::server::extract::ApiJson;

/// GET /waitlist
pub async fn list_waitlist_handler(
    State(deps): State<ServerDeps>,
) -> DirectoryResult<Json<Vec<WaitlistEntryData>>> {
    let entries = activities::list_waitlist_entries(&deps).await?;
    Ok(Json(entries.into_iter().map(WaitlistEntryData::from).collect()))
}

/// POST /waitlist
pub async fn create_waitlist_entry_handler(
    State(deps): State<ServerDeps>,
    ApiJson(input): ApiJson<WaitlistEntryInput>,
) -> DirectoryResult<Json<WaitlistEntryData>> {
    let entry = activities::create_waitlist_entry(input.into(), &deps).await?;
    Ok(Json(WaitlistEntryData::from(entry)))
}
