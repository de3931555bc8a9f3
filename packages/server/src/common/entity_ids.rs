//! Typed ID definitions for the directory entities.
//!
//! ```rust
//! use childcare_core::common::{AgencyId, ProviderId};
//!
//! let provider_id = ProviderId::from_i32(1);
//! let agency_id = AgencyId::from_i32(1);
//!
//! // Same integer, incompatible types:
//! // let wrong: AgencyId = provider_id;
//! # let _ = (provider_id, agency_id);
//! ```

pub use super::id::Id;

// ============================================================================
// Entity marker types
// ============================================================================

/// Marker type for Agency entities (managing organizations).
pub struct Agency;

/// Marker type for Provider entities (childcare facilities).
pub struct Provider;

/// Marker type for WaitlistEntry entities.
pub struct WaitlistEntry;

// ============================================================================
// Type aliases - the primary API
// ============================================================================

/// Typed ID for Agency entities.
pub type AgencyId = Id<Agency>;

/// Typed ID for Provider entities.
pub type ProviderId = Id<Provider>;

/// Typed ID for WaitlistEntry entities.
pub type WaitlistEntryId = Id<WaitlistEntry>;
