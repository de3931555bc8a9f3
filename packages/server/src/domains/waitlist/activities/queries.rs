//! Waitlist query actions

use tracing::info;

use crate::common::DirectoryResult;
use crate::domains::waitlist::models::WaitlistEntry;
use crate::kernel::ServerDeps;

/// Get all waitlist entries, unfiltered
pub async fn list_waitlist_entries(deps: &ServerDeps) -> DirectoryResult<Vec<WaitlistEntry>> {
    info!("Listing waitlist entries");

    Ok(WaitlistEntry::find_all(&deps.db_pool).await?)
}
