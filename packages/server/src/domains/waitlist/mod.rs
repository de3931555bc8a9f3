//! Waitlist domain - families waiting for a spot with a provider

pub mod activities;
pub mod data;
pub mod models;

pub use data::{WaitlistEntryData, WaitlistEntryInput};
pub use models::{CreateWaitlistEntry, WaitlistEntry};
