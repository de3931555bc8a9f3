//! Integration tests for waitlist creation and listing

mod common;

use crate::common::{create_test_provider, waitlist_input, TestHarness};
use chrono::{SubsecRound, Utc};
use childcare_core::common::{DirectoryError, ProviderId};
use childcare_core::domains::waitlist::activities::{create_waitlist_entry, list_waitlist_entries};
use childcare_core::domains::waitlist::models::WaitlistEntry;
use std::collections::HashSet;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn unknown_provider_is_rejected_without_insert(ctx: &TestHarness) {
    create_test_provider(&ctx.db_pool, "Sunrise Center", None)
        .await
        .unwrap();
    let before = WaitlistEntry::count(&ctx.db_pool).await.unwrap();

    let err = create_waitlist_entry(waitlist_input(ProviderId::from_i32(9999)), &ctx.deps)
        .await
        .unwrap_err();

    assert!(matches!(err, DirectoryError::Validation(ref msg) if msg == "Invalid provider ID"));
    assert_eq!(WaitlistEntry::count(&ctx.db_pool).await.unwrap(), before);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn created_entry_has_fresh_id_and_timestamp(ctx: &TestHarness) {
    let provider = create_test_provider(&ctx.db_pool, "Sunrise Center", None)
        .await
        .unwrap();

    let called_at = Utc::now().trunc_subsecs(6);
    let first = create_waitlist_entry(waitlist_input(provider.id), &ctx.deps)
        .await
        .unwrap();
    let second = create_waitlist_entry(waitlist_input(provider.id), &ctx.deps)
        .await
        .unwrap();

    assert_ne!(first.id, second.id);
    assert!(first.timestamp >= called_at);
    assert!(second.timestamp >= first.timestamp);
    assert_eq!(WaitlistEntry::count(&ctx.db_pool).await.unwrap(), 2);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn created_entry_round_trips_through_list(ctx: &TestHarness) {
    let provider = create_test_provider(&ctx.db_pool, "Sunrise Center", None)
        .await
        .unwrap();
    let input = waitlist_input(provider.id);

    let created = create_waitlist_entry(input.clone(), &ctx.deps).await.unwrap();
    let listed = list_waitlist_entries(&ctx.deps).await.unwrap();

    assert_eq!(listed, vec![created.clone()]);
    let entry = &listed[0];
    assert_eq!(entry.parent_names, input.parent_names);
    assert_eq!(entry.child_name, input.child_name);
    assert_eq!(entry.child_age, input.child_age);
    assert_eq!(entry.dob_or_due_date, input.dob_or_due_date);
    assert_eq!(entry.desired_start_month, input.desired_start_month);
    assert_eq!(entry.desired_start_year, input.desired_start_year);
    assert_eq!(entry.provider_id, provider.id);
    assert_eq!(entry.timestamp, created.timestamp);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn list_matches_row_count(ctx: &TestHarness) {
    let a = create_test_provider(&ctx.db_pool, "A", None).await.unwrap();
    let b = create_test_provider(&ctx.db_pool, "B", None).await.unwrap();

    for provider_id in [a.id, b.id, a.id] {
        create_waitlist_entry(waitlist_input(provider_id), &ctx.deps)
            .await
            .unwrap();
    }

    let listed = list_waitlist_entries(&ctx.deps).await.unwrap();
    assert_eq!(
        listed.len() as i64,
        WaitlistEntry::count(&ctx.db_pool).await.unwrap()
    );
    assert_eq!(listed.len(), 3);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn concurrent_creates_produce_distinct_rows(ctx: &TestHarness) {
    let provider = create_test_provider(&ctx.db_pool, "Busy Center", None)
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let deps = ctx.deps.clone();
        let input = waitlist_input(provider.id);
        handles.push(tokio::spawn(async move {
            create_waitlist_entry(input, &deps).await
        }));
    }

    let mut ids = HashSet::new();
    for handle in handles {
        let entry = handle.await.unwrap().unwrap();
        ids.insert(entry.id);
    }

    assert_eq!(ids.len(), 8);
    assert_eq!(WaitlistEntry::count(&ctx.db_pool).await.unwrap(), 8);
}
