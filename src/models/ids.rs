//! Strongly-typed ID wrappers for all entity types
//!
//! Using newtype wrappers prevents accidentally mixing up IDs from different
//! entity types at compile time. IDs are stable positive integers assigned
//! by the surrounding application, never generated here.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Macro to generate ID newtype wrappers
macro_rules! define_id {
    ($name:ident, $display_prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw numeric ID
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the underlying numeric value
            pub const fn raw(&self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $display_prefix, self.0)
            }
        }

        impl From<u64> for $name {
            fn from(raw: u64) -> Self {
                Self(raw)
            }
        }

        impl FromStr for $name {
            type Err = ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                // Accept both the bare number and the prefixed display form
                let s = s.strip_prefix($display_prefix).unwrap_or(s);
                Ok(Self(s.parse()?))
            }
        }
    };
}

define_id!(CategoryId, "cat-");
define_id!(UserId, "usr-");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(CategoryId::new(7).to_string(), "cat-7");
        assert_eq!(UserId::new(42).to_string(), "usr-42");
    }

    #[test]
    fn test_id_ordering() {
        assert!(CategoryId::new(1) < CategoryId::new(2));
        assert!(CategoryId::new(12) > CategoryId::new(3));
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("cat-3".parse::<CategoryId>().unwrap(), CategoryId::new(3));
        assert_eq!("3".parse::<CategoryId>().unwrap(), CategoryId::new(3));
        assert!("cat-x".parse::<CategoryId>().is_err());
    }

    #[test]
    fn test_id_serialization() {
        let id = CategoryId::new(9);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "9");

        let deserialized: CategoryId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_different_id_types_not_mixable() {
        // Different ID types are distinct at compile time; only the raw
        // values can be compared.
        let category_id = CategoryId::new(5);
        let user_id = UserId::new(5);
        assert_eq!(category_id.raw(), user_id.raw());
    }
}
