//! Providers domain - childcare facility directory

pub mod activities;
pub mod data;
pub mod models;

// Re-export commonly used types
pub use data::ProviderData;
pub use models::{CreateProvider, Provider};
