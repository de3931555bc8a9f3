//! Agencies domain - organizations that manage providers

pub mod activities;
pub mod data;
pub mod models;

pub use data::AgencyData;
pub use models::{Agency, CreateAgency};
