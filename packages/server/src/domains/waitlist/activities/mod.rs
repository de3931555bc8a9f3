//! Waitlist access-layer operations

mod mutations;
mod queries;

pub use mutations::*;
pub use queries::*;
