use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::coerce::int_or_numeric_string;
use crate::common::{ProviderId, WaitlistEntryId};
use crate::domains::waitlist::models::{CreateWaitlistEntry, WaitlistEntry};

/// Request body for joining a provider's waitlist. Every field is required;
/// the integer fields also accept numeric strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaitlistEntryInput {
    pub parent_names: String,
    pub child_name: String,
    pub child_age: String,
    pub dob_or_due_date: String,
    pub desired_start_month: String,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub desired_start_year: i32,
    #[serde(deserialize_with = "int_or_numeric_string")]
    pub provider_id: ProviderId,
}

impl From<WaitlistEntryInput> for CreateWaitlistEntry {
    fn from(input: WaitlistEntryInput) -> Self {
        Self {
            parent_names: input.parent_names,
            child_name: input.child_name,
            child_age: input.child_age,
            dob_or_due_date: input.dob_or_due_date,
            desired_start_month: input.desired_start_month,
            desired_start_year: input.desired_start_year,
            provider_id: input.provider_id,
        }
    }
}

/// Waitlist entry response shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaitlistEntryData {
    pub id: WaitlistEntryId,
    pub parent_names: String,
    pub child_name: String,
    pub child_age: String,
    pub dob_or_due_date: String,
    pub desired_start_month: String,
    pub desired_start_year: i32,
    pub provider_id: ProviderId,
    pub timestamp: DateTime<Utc>,
}

impl From<WaitlistEntry> for WaitlistEntryData {
    fn from(entry: WaitlistEntry) -> Self {
        Self {
            id: entry.id,
            parent_names: entry.parent_names,
            child_name: entry.child_name,
            child_age: entry.child_age,
            dob_or_due_date: entry.dob_or_due_date,
            desired_start_month: entry.desired_start_month,
            desired_start_year: entry.desired_start_year,
            provider_id: entry.provider_id,
            timestamp: entry.timestamp,
        }
    }
}
