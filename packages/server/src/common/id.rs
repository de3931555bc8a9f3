//! Typed integer identifiers for compile-time type safety.
//!
//! `Id<T>` wraps the `SERIAL` primary key of a table and carries a phantom
//! entity marker, so a `ProviderId` can never be passed where an `AgencyId`
//! was expected.
//!
//! # Example
//!
//! ```rust
//! use childcare_core::common::Id;
//!
//! pub struct Provider;
//! pub struct Agency;
//!
//! pub type ProviderId = Id<Provider>;
//! pub type AgencyId = Id<Agency>;
//!
//! let provider_id = ProviderId::from_i32(7);
//! assert_eq!(provider_id.as_i32(), 7);
//!
//! // This would be a compile error:
//! // let wrong: AgencyId = provider_id;
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

/// A typed wrapper around an `i32` row identifier.
///
/// Identifiers are always assigned by the database; there is no constructor
/// that invents a fresh one.
#[repr(transparent)]
pub struct Id<T>(i32, PhantomData<fn() -> T>);

// ============================================================================
// Core implementations
// ============================================================================

impl<T> Id<T> {
    /// Creates an `Id` from a raw integer (database rows, path parameters).
    #[inline]
    pub const fn from_i32(raw: i32) -> Self {
        Self(raw, PhantomData)
    }

    /// Returns the inner integer.
    #[inline]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Narrows a wider integer, returning `None` when it cannot be a row id.
    #[inline]
    pub fn from_i64(raw: i64) -> Option<Self> {
        i32::try_from(raw).ok().map(Self::from_i32)
    }

    /// Parses an `Id` from a decimal string.
    #[inline]
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self::from_i32(s.trim().parse()?))
    }
}

// ============================================================================
// Standard trait implementations
// ============================================================================

impl<T> Clone for Id<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Include type name for debugging clarity
        f.debug_tuple(&format!("Id<{}>", std::any::type_name::<T>()))
            .field(&self.0)
            .finish()
    }
}

impl<T> Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for Id<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> Hash for Id<T> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> FromStr for Id<T> {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<T> From<i32> for Id<T> {
    #[inline]
    fn from(raw: i32) -> Self {
        Self::from_i32(raw)
    }
}

impl<T> From<Id<T>> for i32 {
    #[inline]
    fn from(id: Id<T>) -> Self {
        id.0
    }
}

impl<T> From<Id<T>> for i64 {
    #[inline]
    fn from(id: Id<T>) -> Self {
        i64::from(id.0)
    }
}

// ============================================================================
// Serde support (bare JSON number)
// ============================================================================

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i32::deserialize(deserializer).map(Self::from_i32)
    }
}

// ============================================================================
// sqlx support (INT4)
// ============================================================================

use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::postgres::{PgArgumentBuffer, PgHasArrayType, PgTypeInfo, PgValueRef, Postgres};
use sqlx::{Decode, Encode, Type};

impl<T> Type<Postgres> for Id<T> {
    fn type_info() -> PgTypeInfo {
        <i32 as Type<Postgres>>::type_info()
    }

    fn compatible(ty: &PgTypeInfo) -> bool {
        <i32 as Type<Postgres>>::compatible(ty)
    }
}

impl<T> PgHasArrayType for Id<T> {
    fn array_type_info() -> PgTypeInfo {
        <i32 as PgHasArrayType>::array_type_info()
    }
}

impl<T> Encode<'_, Postgres> for Id<T> {
    fn encode_by_ref(&self, buf: &mut PgArgumentBuffer) -> Result<IsNull, BoxDynError> {
        <i32 as Encode<Postgres>>::encode_by_ref(&self.0, buf)
    }
}

impl<T> Decode<'_, Postgres> for Id<T> {
    fn decode(value: PgValueRef<'_>) -> Result<Self, BoxDynError> {
        <i32 as Decode<Postgres>>::decode(value).map(Self::from_i32)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Thing;

    type ThingId = Id<Thing>;

    #[test]
    fn test_parse_and_display_roundtrip() {
        let id = ThingId::from_i32(42);
        let parsed = ThingId::parse(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(ThingId::parse("abc").is_err());
        assert!("12.5".parse::<ThingId>().is_err());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let id = ThingId::from_i32(9);
        assert_eq!(serde_json::to_string(&id).unwrap(), "9");

        let parsed: ThingId = serde_json::from_str("9").unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_rejects_string_json() {
        assert!(serde_json::from_str::<ThingId>("\"9\"").is_err());
    }

    #[test]
    fn test_from_i64_rejects_out_of_range() {
        assert_eq!(ThingId::from_i64(7), Some(ThingId::from_i32(7)));
        assert_eq!(ThingId::from_i64(i64::from(i32::MAX) + 1), None);
        assert_eq!(ThingId::from_i64(i64::from(i32::MIN) - 1), None);
    }

    #[test]
    fn test_hash_map_key() {
        use std::collections::HashMap;
        let mut map: HashMap<ThingId, &str> = HashMap::new();
        let id = ThingId::from_i32(3);
        map.insert(id, "test");
        assert_eq!(map.get(&id), Some(&"test"));
    }

    #[test]
    fn test_ordering_follows_integer() {
        assert!(ThingId::from_i32(1) < ThingId::from_i32(2));
    }

    #[test]
    fn test_debug_includes_type_name() {
        let debug = format!("{:?}", ThingId::from_i32(1));
        assert!(debug.contains("Thing"));
    }
}
