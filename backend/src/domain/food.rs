//! Food catalogue model: foods and the ingredient labels they contain.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{FoodContentId, FoodId};

/// Maximum length of food and content names.
pub const NAME_MAX: usize = 255;
/// Maximum length of a stored image reference.
pub const IMAGE_REF_MAX: usize = 100;

/// Validation errors for catalogue values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FoodValidationError {
    /// Name was blank once trimmed.
    #[error("{field} must not be empty")]
    EmptyName { field: &'static str },
    /// Name exceeded [`NAME_MAX`].
    #[error("{field} must be at most {max} characters")]
    NameTooLong { field: &'static str, max: usize },
    /// Image reference was blank.
    #[error("image must not be empty")]
    EmptyImage,
    /// Image reference exceeded [`IMAGE_REF_MAX`].
    #[error("image reference must be at most {max} characters")]
    ImageTooLong { max: usize },
}

impl FoodValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyName { field } | Self::NameTooLong { field, .. } => field,
            Self::EmptyImage | Self::ImageTooLong { .. } => "image",
        }
    }
}

fn validated_name(value: &str, field: &'static str) -> Result<String, FoodValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FoodValidationError::EmptyName { field });
    }
    if trimmed.chars().count() > NAME_MAX {
        return Err(FoodValidationError::NameTooLong {
            field,
            max: NAME_MAX,
        });
    }
    Ok(trimmed.to_owned())
}

/// Label of an ingredient or allergen, e.g. `peanuts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentName(String);

impl ContentName {
    /// Validate and construct a [`ContentName`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, FoodValidationError> {
        validated_name(value.as_ref(), "name").map(Self)
    }
}

impl AsRef<str> for ContentName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<ContentName> for String {
    fn from(value: ContentName) -> Self {
        value.0
    }
}

impl TryFrom<String> for ContentName {
    type Error = FoodValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a food product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FoodName(String);

impl FoodName {
    /// Validate and construct a [`FoodName`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, FoodValidationError> {
        validated_name(value.as_ref(), "name").map(Self)
    }
}

impl AsRef<str> for FoodName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<FoodName> for String {
    fn from(value: FoodName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FoodName {
    type Error = FoodValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Opaque reference to a food photo held by the blob store.
///
/// The backend never opens the referenced blob; it only stores and returns
/// the reference (conventionally a path below `foods/`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ImageRef(String);

impl ImageRef {
    /// Validate and construct an [`ImageRef`].
    pub fn new(value: impl AsRef<str>) -> Result<Self, FoodValidationError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FoodValidationError::EmptyImage);
        }
        if trimmed.chars().count() > IMAGE_REF_MAX {
            return Err(FoodValidationError::ImageTooLong { max: IMAGE_REF_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ImageRef {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<ImageRef> for String {
    fn from(value: ImageRef) -> Self {
        value.0
    }
}

impl TryFrom<String> for ImageRef {
    type Error = FoodValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Ingredient/allergen label attachable to foods and user sensitivities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FoodContent {
    pub id: FoodContentId,
    pub name: ContentName,
}

impl FoodContent {
    /// Build a content record from validated parts.
    pub fn new(id: FoodContentId, name: ContentName) -> Self {
        Self { id, name }
    }
}

/// Food product with its ingredient list.
///
/// ## Invariants
/// - `contents` holds each content id at most once, in attachment order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub id: FoodId,
    pub name: FoodName,
    pub image: ImageRef,
    pub contents: Vec<FoodContentId>,
}

/// Administration payload for a food that has no identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFood {
    pub name: FoodName,
    pub image: ImageRef,
    contents: Vec<FoodContentId>,
}

impl NewFood {
    /// Build a new food, collapsing repeated content ids.
    ///
    /// # Examples
    /// ```
    /// use scanfood::domain::{FoodContentId, FoodName, ImageRef, NewFood};
    ///
    /// let gluten = FoodContentId::new(1).unwrap();
    /// let food = NewFood::new(
    ///     FoodName::new("Bread").unwrap(),
    ///     ImageRef::new("foods/bread.jpg").unwrap(),
    ///     vec![gluten, gluten],
    /// );
    /// assert_eq!(food.contents(), &[gluten]);
    /// ```
    pub fn new(name: FoodName, image: ImageRef, contents: Vec<FoodContentId>) -> Self {
        let mut unique = Vec::with_capacity(contents.len());
        for id in contents {
            if !unique.contains(&id) {
                unique.push(id);
            }
        }
        Self {
            name,
            image,
            contents: unique,
        }
    }

    /// De-duplicated content ids in first-seen order.
    pub fn contents(&self) -> &[FoodContentId] {
        &self.contents
    }
}
