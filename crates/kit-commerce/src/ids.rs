//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a CartLineId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a new random ID.
            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().simple().to_string())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(CartLineId);
define_id!(OrderId);

impl CartLineId {
    /// Line IDs are handed out by the cart in insertion order.
    pub(crate) fn sequence(n: u64) -> Self {
        Self(format!("line-{}", n))
    }
}

impl OrderId {
    /// Short customer-facing order reference, e.g. `PK-3F9A1C2B`.
    pub fn reference() -> Self {
        let raw = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("PK-{}", raw[..8].to_uppercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("barca-home-25");
        assert_eq!(id.as_str(), "barca-home-25");
    }

    #[test]
    fn test_id_generation() {
        let id1 = OrderId::generate();
        let id2 = OrderId::generate();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_line_id_sequence() {
        assert_eq!(CartLineId::sequence(1).as_str(), "line-1");
        assert_ne!(CartLineId::sequence(1), CartLineId::sequence(2));
    }

    #[test]
    fn test_order_reference_shape() {
        let reference = OrderId::reference();
        assert!(reference.as_str().starts_with("PK-"));
        assert_eq!(reference.as_str().len(), 11);
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("messi-mvp-25");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"messi-mvp-25\"");
    }
}
