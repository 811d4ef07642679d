//! Fixed option sets offered by the form's select inputs.
//!
//! Every option type serializes to its display label, parses labels
//! case-insensitively, and lists its values through `ALL`.

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

macro_rules! define_options {
    ($(#[$meta:meta])* $name:ident, $field:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Form field this option set belongs to.
            pub const FIELD: &'static str = $field;

            #[must_use]
            pub const fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                let wanted = value.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|option| option.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| $crate::error::Error::UnknownOption {
                        field: $field,
                        value: value.to_string(),
                    })
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let label = <String as serde::Deserialize>::deserialize(deserializer)?;
                label.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

mod genre;
mod language;
mod release;

pub use genre::Genre;
pub use language::Language;
pub use release::{MovieType, Status};

/// Parse an optional select value where the empty string means "unset".
///
/// # Errors
///
/// Returns the option type's parse error for a non-empty unknown label.
pub fn parse_choice<T: FromStr>(value: &str) -> Result<Option<T>, T::Err> {
    if value.trim().is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Serde adapter for optional select fields; `""` and `null` are unset.
pub mod choice {
    use super::{parse_choice, Deserialize, Deserializer, FromStr};
    use serde::{Serialize, Serializer};
    use std::fmt::Display;

    pub fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr,
        T::Err: Display,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(label) => parse_choice(&label).map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
