//! Newtype identifiers.
//!
//! Product, order, and user ids all come from the hosted backend as opaque
//! strings; wrapping them keeps one from being passed where another is
//! expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident) => {
        /// An opaque backend-assigned identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing identifier.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// True when the identifier carries no value.
            ///
            /// Blank ids come from malformed records; callers treat them as
            /// unresolvable rather than erroring.
            pub fn is_blank(&self) -> bool {
                self.0.trim().is_empty()
            }

            /// Consume the wrapper and return the inner string.
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
define_id!(OrderId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_construction() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
        assert_eq!(format!("{id}"), "prod-123");
    }

    #[test]
    fn test_blank_detection() {
        assert!(ProductId::new("").is_blank());
        assert!(ProductId::new("   ").is_blank());
        assert!(!ProductId::new("p1").is_blank());
        assert!(ProductId::default().is_blank());
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(OrderId::new("o1"), OrderId::from("o1"));
        assert_ne!(OrderId::new("o1"), OrderId::new("o2"));
    }
}
