//! Waitlist mutation actions

use chrono::{SubsecRound, Utc};
use tracing::info;

use crate::common::{DirectoryError, DirectoryResult};
use crate::domains::providers::models::Provider;
use crate::domains::waitlist::models::{CreateWaitlistEntry, WaitlistEntry};
use crate::kernel::ServerDeps;

/// SQLSTATE for foreign_key_violation
const FOREIGN_KEY_VIOLATION: &str = "23503";

const INVALID_PROVIDER: &str = "Invalid provider ID";

/// Add a family to a provider's waitlist
///
/// The provider must exist. The existence check and the insert share one
/// transaction, and the provider row stays key-share locked until commit.
/// Each call inserts a new row.
pub async fn create_waitlist_entry(
    input: CreateWaitlistEntry,
    deps: &ServerDeps,
) -> DirectoryResult<WaitlistEntry> {
    info!(provider_id = %input.provider_id, "Creating waitlist entry");

    let mut tx = deps.db_pool.begin().await?;

    if !Provider::lock_for_reference(input.provider_id, &mut tx).await? {
        info!(provider_id = %input.provider_id, "Rejecting waitlist entry for unknown provider");
        tx.rollback().await?;
        return Err(DirectoryError::validation(INVALID_PROVIDER));
    }

    // Postgres stores microseconds; truncate so the returned value matches storage
    let timestamp = Utc::now().trunc_subsecs(6);

    let entry = WaitlistEntry::create(&input, timestamp, &mut *tx)
        .await
        .map_err(map_foreign_key_violation)?;

    tx.commit().await?;

    info!(
        waitlist_entry_id = %entry.id,
        provider_id = %entry.provider_id,
        "Waitlist entry created"
    );

    Ok(entry)
}

fn map_foreign_key_violation(err: sqlx::Error) -> DirectoryError {
    match &err {
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some(FOREIGN_KEY_VIOLATION) =>
        {
            DirectoryError::validation(INVALID_PROVIDER)
        }
        _ => DirectoryError::Storage(err),
    }
}
