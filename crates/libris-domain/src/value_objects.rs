//! Value objects representing immutable domain identifiers
//!
//! Two identifier families exist:
//! - category codes (genre, media type, language, nationality): small
//!   integers maintained in lookup tables
//! - record keys (media personality, borrower, media): UUIDs
//!
//! Each identifier is a distinct type; a [`GenreId`] cannot be passed where a
//! [`LanguageId`] is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::DomainError;

/// Integer code of a lookup-table entry
pub trait CategoryCode: Copy + fmt::Debug + Send + Sync {
    /// Raw code
    fn code(&self) -> i32;
}

macro_rules! category_code {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Wrap a raw code
            pub const fn new(value: i32) -> Self {
                Self(value)
            }

            /// Raw code
            pub const fn value(&self) -> i32 {
                self.0
            }
        }

        impl CategoryCode for $name {
            fn code(&self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

macro_rules! record_key {
    ($(#[$meta:meta])* $name:ident, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random key
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Parse from the hyphenated string form
            pub fn from_string(s: &str) -> Result<Self, DomainError> {
                Uuid::parse_str(s.trim())
                    .map(Self)
                    .map_err(|e| DomainError::InvalidIdentifier {
                        entity_type: $entity.to_string(),
                        reason: e.to_string(),
                    })
            }

            /// Access the underlying UUID
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_string(s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

category_code!(
    /// Genre code (fiction, documentary, jazz, ...)
    GenreId
);
category_code!(
    /// Media type code (hardcover, DVD, vinyl, ...)
    MediaTypeId
);
category_code!(
    /// Written or spoken language code
    LanguageId
);
category_code!(
    /// Nationality code of a media personality
    NationalityId
);

record_key!(
    /// Key of an author, director, actor or artist
    MediaPersonalityId,
    "MediaPersonality"
);
record_key!(
    /// Key of a registered borrower
    BorrowerId,
    "Borrower"
);
record_key!(
    /// Key of a media item (book, movie or music)
    MediaId,
    "Media"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_code_accessors() {
        let genre = GenreId::new(12);
        assert_eq!(genre.value(), 12);
        assert_eq!(genre.to_string(), "12");
        assert_eq!(LanguageId::from(3), LanguageId::new(3));
    }

    #[test]
    fn test_category_code_serializes_transparently() {
        let json = serde_json::to_string(&NationalityId::new(45)).unwrap();
        assert_eq!(json, "45");
        let parsed: MediaTypeId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed.value(), 7);
    }

    #[test]
    fn test_record_key_parses_hyphenated_form() {
        let id = BorrowerId::new();
        let parsed = BorrowerId::from_string(&id.to_string()).unwrap();
        assert_eq!(id, parsed);
        let via_from_str: BorrowerId = id.to_string().parse().unwrap();
        assert_eq!(id, via_from_str);
    }

    #[test]
    fn test_record_key_rejects_garbage() {
        let err = MediaId::from_string("not-a-uuid").unwrap_err();
        assert!(matches!(
            err,
            DomainError::InvalidIdentifier { ref entity_type, .. } if entity_type == "Media"
        ));
    }

    #[test]
    fn test_record_keys_are_unique() {
        assert_ne!(MediaPersonalityId::new(), MediaPersonalityId::new());
    }
}
