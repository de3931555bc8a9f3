// Common types shared across the directory domains

pub mod coerce;
pub mod entity_ids;
pub mod error;
pub mod id;

pub use entity_ids::*;
pub use error::{DirectoryError, DirectoryResult};
pub use id::Id;
