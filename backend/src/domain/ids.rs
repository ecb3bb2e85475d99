//! Store-assigned entity identifiers.
//!
//! Every entity is keyed by a positive 64-bit integer handed out by the Data
//! Store. Each entity gets its own newtype so a food id can never be passed
//! where a user id is expected.

use thiserror::Error;

/// Validation error for identifiers decoded from untrusted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("identifier must be a positive integer, got {value}")]
pub struct IdValidationError {
    /// The rejected raw value.
    pub value: i64,
}

macro_rules! define_entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            /// Validate and wrap a raw identifier.
            pub fn new(value: i64) -> Result<Self, IdValidationError> {
                if value <= 0 {
                    return Err(IdValidationError { value });
                }
                Ok(Self(value))
            }

            /// Raw integer value as stored.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// Wrap a value read back from the store, which only hands out
            /// positive keys.
            pub(crate) const fn from_store(value: i64) -> Self {
                Self(value)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = IdValidationError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_entity_id! {
    /// Identifier of a registered user.
    UserId
}

define_entity_id! {
    /// Identifier of a food product.
    FoodId
}

define_entity_id! {
    /// Identifier of an ingredient/allergen label.
    FoodContentId
}

define_entity_id! {
    /// Identifier of a persisted confirmation log entry.
    ConfirmationLogId
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-7)]
    fn rejects_non_positive_values(#[case] raw: i64) {
        let err = UserId::new(raw).expect_err("non-positive ids are invalid");
        assert_eq!(err.value, raw);
    }

    #[rstest]
    fn deserialises_from_json_numbers() {
        let id: FoodContentId = serde_json::from_str("42").expect("valid id");
        assert_eq!(id.get(), 42);
        assert!(serde_json::from_str::<FoodContentId>("0").is_err());
    }

    #[rstest]
    fn serialises_as_plain_number() {
        let id = FoodId::new(3).expect("valid id");
        assert_eq!(serde_json::to_string(&id).expect("serialise"), "3");
    }
}
