//! Identifier types used by the record files.
//!
//! Every identifier is a fixed prefix followed by a suffix. Generated
//! suffixes are zero-padded random decimals, so uniqueness is probabilistic:
//! callers that create records check for collisions by scanning the store.

use crate::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! prefixed_id {
    ($(#[$meta:meta])* $name:ident, kind = $kind:literal, prefix = $prefix:literal, digits = $digits:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Literal prefix every identifier of this kind starts with.
            pub const PREFIX: &'static str = $prefix;

            /// Number of digits in a generated suffix.
            pub const SUFFIX_DIGITS: u32 = $digits;

            /// Generates a new identifier with a random suffix.
            #[must_use]
            pub fn generate() -> Self {
                Self::generate_with(&mut rand::thread_rng())
            }

            /// Generates a new identifier drawing the suffix from `rng`.
            #[must_use]
            pub fn generate_with<R: Rng>(rng: &mut R) -> Self {
                let bound = 10u64.pow(Self::SUFFIX_DIGITS);
                Self::from_number(rng.gen_range(0..bound))
            }

            /// Builds an identifier from a numeric suffix, zero-padded to
            /// [`Self::SUFFIX_DIGITS`].
            #[must_use]
            pub fn from_number(n: u64) -> Self {
                let width = Self::SUFFIX_DIGITS as usize;
                Self(format!("{}{:0width$}", Self::PREFIX, n))
            }

            /// Parses an identifier, requiring the prefix and a non-empty suffix.
            pub fn parse(s: &str) -> Result<Self> {
                match s.strip_prefix(Self::PREFIX) {
                    Some(rest) if !rest.is_empty() && !rest.chars().any(char::is_whitespace) => {
                        Ok(Self(s.to_string()))
                    }
                    _ => Err(Error::InvalidId {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }

            /// Returns the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self> {
                Self::parse(s)
            }
        }

        impl TryFrom<String> for $name {
            type Error = Error;

            fn try_from(s: String) -> Result<Self> {
                Self::parse(&s)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

prefixed_id!(
    /// Identifier of a user account (admin or customer), e.g. `u_0123456789`.
    UserId,
    kind = "user",
    prefix = "u_",
    digits = 10
);

prefixed_id!(
    /// Identifier of a product, e.g. `p_0001`.
    ProductId,
    kind = "product",
    prefix = "p_",
    digits = 4
);

prefixed_id!(
    /// Identifier of an order, e.g. `o_04217`.
    OrderId,
    kind = "order",
    prefix = "o_",
    digits = 5
);
