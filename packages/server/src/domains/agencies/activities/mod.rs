//! Agency access-layer operations

mod queries;

pub use queries::*;
