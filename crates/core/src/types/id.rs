//! Newtype IDs for type-safe entity references.
//!
//! Identifiers in the store are opaque strings ("1", "2", ...). The
//! `define_id!` macro wraps them so a product ID can never be passed where a
//! cart line or user ID is expected.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `new()` and `as_str()`
/// - `Display`, `From<String>` and `From<&str>`
///
/// # Example
///
/// ```rust
/// # use shutterhive_core::define_id;
/// define_id!(LensId);
/// define_id!(BodyId);
///
/// let lens = LensId::new("7");
/// assert_eq!(lens.as_str(), "7");
///
/// // These are different types, so this won't compile:
/// // let _: BodyId = lens;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }
    };
}

define_id!(ProductId);
define_id!(CartLineId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_inner_value() {
        assert_eq!(ProductId::new("42").to_string(), "42");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&UserId::from("3")).ok();
        assert_eq!(json.as_deref(), Some("\"3\""));
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(ProductId::new("10") < ProductId::new("9"));
    }
}
