//! Type-prefixed record identifiers.
//!
//! Every record id is a short type prefix followed by the 32 hex digits of a
//! random v4 UUID, e.g. `news_3f2a...`. Ids are unique with overwhelming
//! probability but carry no ordering. Distinct newtypes keep a `UserId`
//! from being passed where a `NewsId` is expected. With the `sqlx` feature
//! each id is stored as `TEXT` in PostgreSQL.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a string is not a well-formed record id.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {prefix} id: '{value}'")]
pub struct InvalidId {
    /// Expected type prefix.
    pub prefix: &'static str,
    /// The rejected input.
    pub value: String,
}

/// Macro to define a prefixed id newtype.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident, $prefix:literal
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Type prefix of this identifier.
            pub const PREFIX: &'static str = $prefix;

            /// Generate a new random identifier.
            pub fn generate() -> Self {
                Self(format!("{}_{}", Self::PREFIX, Uuid::new_v4().simple()))
            }

            /// Parse and validate an identifier.
            pub fn parse(value: &str) -> Result<Self, InvalidId> {
                let valid = value
                    .strip_prefix(Self::PREFIX)
                    .and_then(|rest| rest.strip_prefix('_'))
                    .is_some_and(|token| {
                        token.len() == 32 && token.bytes().all(|b| b.is_ascii_hexdigit())
                    });

                if valid {
                    Ok(Self(value.to_string()))
                } else {
                    Err(InvalidId {
                        prefix: Self::PREFIX,
                        value: value.to_string(),
                    })
                }
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl FromStr for $name {
            type Err = InvalidId;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        #[cfg(feature = "sqlx")]
        impl sqlx::Type<sqlx::Postgres> for $name {
            fn type_info() -> sqlx::postgres::PgTypeInfo {
                <String as sqlx::Type<sqlx::Postgres>>::type_info()
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'q> sqlx::Encode<'q, sqlx::Postgres> for $name {
            fn encode_by_ref(
                &self,
                buf: &mut <sqlx::Postgres as sqlx::Database>::ArgumentBuffer<'q>,
            ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
                <String as sqlx::Encode<'q, sqlx::Postgres>>::encode_by_ref(&self.0, buf)
            }
        }

        #[cfg(feature = "sqlx")]
        impl<'r> sqlx::Decode<'r, sqlx::Postgres> for $name {
            fn decode(
                value: <sqlx::Postgres as sqlx::Database>::ValueRef<'r>,
            ) -> Result<Self, sqlx::error::BoxDynError> {
                <String as sqlx::Decode<'r, sqlx::Postgres>>::decode(value).map(Self)
            }
        }
    };
}

define_id!(
    /// Unique identifier for a news bulletin.
    NewsId, "news"
);

define_id!(
    /// Unique identifier for a user.
    UserId, "user"
);
