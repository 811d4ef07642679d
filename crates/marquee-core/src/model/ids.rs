use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Identifiers arrive as strings from the backend, but the live search
/// widget hands out numeric temporary ids. The JSON type is kept so an id
/// is sent back the way it came in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        ///
        /// Equality, ordering and hashing use the textual form, so `7` and
        /// `"7"` name the same entity.
        #[derive(Debug, Clone)]
        pub struct $name {
            text: String,
            number: Option<u64>,
        }

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self {
                    text: id.into(),
                    number: None,
                }
            }

            pub fn as_str(&self) -> &str {
                &self.text
            }

            /// Whether the id arrived as a JSON number.
            pub fn is_numeric(&self) -> bool {
                self.number.is_some()
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.text == other.text
            }
        }

        impl Eq for $name {}

        impl std::hash::Hash for $name {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                self.text.hash(state);
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.text.cmp(&other.text)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.text)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.text
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self::new(id)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self {
                    text: id.to_string(),
                    number: Some(id),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self.number {
                    Some(number) => serializer.serialize_u64(number),
                    None => serializer.serialize_str(&self.text),
                }
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                Ok(match RawId::deserialize(deserializer)? {
                    RawId::Text(text) => Self::new(text),
                    RawId::Number(number) => Self::from(number),
                })
            }
        }
    };
}

define_id!(MovieId, "Backend identifier of a persisted movie record.");
define_id!(
    PersonId,
    "Identifier of a person, either persisted or assigned by the search widget."
);
