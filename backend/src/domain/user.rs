//! User data model.
//!
//! Users identify themselves by phone number; there is no credential attached
//! to an account.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::UserId;

/// Maximum length of a user's full name.
pub const FULL_NAME_MAX: usize = 255;
/// Maximum length of a phone number.
pub const PHONE_MAX: usize = 20;

/// Validation errors returned by the user value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyFullName,
    FullNameTooLong { max: usize },
    EmptyPhone,
    PhoneTooLong { max: usize },
}

impl UserValidationError {
    /// Request field the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyFullName | Self::FullNameTooLong { .. } => "full_name",
            Self::EmptyPhone | Self::PhoneTooLong { .. } => "phone",
        }
    }

    /// Machine-readable reason code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyFullName | Self::EmptyPhone => "required",
            Self::FullNameTooLong { .. } | Self::PhoneTooLong { .. } => "too_long",
        }
    }
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFullName => write!(f, "full name must not be empty"),
            Self::FullNameTooLong { max } => {
                write!(f, "full name must be at most {max} characters")
            }
            Self::EmptyPhone => write!(f, "phone must not be empty"),
            Self::PhoneTooLong { max } => write!(f, "phone must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Full name as entered at registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FullName(String);

impl FullName {
    /// Validate and construct a [`FullName`].
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyFullName);
        }
        if trimmed.chars().count() > FULL_NAME_MAX {
            return Err(UserValidationError::FullNameTooLong { max: FULL_NAME_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for FullName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}

impl TryFrom<String> for FullName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Phone number used as the login key.
///
/// Stored trimmed; no further normalisation is applied, so `555-0100` and
/// `5550100` are distinct numbers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and construct a [`PhoneNumber`].
    pub fn new(value: impl Into<String>) -> Result<Self, UserValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyPhone);
        }
        if trimmed.chars().count() > PHONE_MAX {
            return Err(UserValidationError::PhoneTooLong { max: PHONE_MAX });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registration payload before the store assigns an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub full_name: FullName,
    pub phone: PhoneNumber,
}

impl NewUser {
    /// Validate raw registration fields.
    ///
    /// # Examples
    /// ```
    /// use scanfood::domain::NewUser;
    ///
    /// let user = NewUser::try_from_parts(" Alice ", "555-0100").unwrap();
    /// assert_eq!(user.full_name.as_ref(), "Alice");
    /// ```
    pub fn try_from_parts(full_name: &str, phone: &str) -> Result<Self, UserValidationError> {
        Ok(Self {
            full_name: FullName::new(full_name)?,
            phone: PhoneNumber::new(phone)?,
        })
    }
}

/// Registered application user.
///
/// ## Invariants
/// - `phone` identifies at most one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    full_name: FullName,
    phone: PhoneNumber,
}

impl User {
    /// Build a [`User`] from validated components.
    pub fn new(id: UserId, full_name: FullName, phone: PhoneNumber) -> Self {
        Self {
            id,
            full_name,
            phone,
        }
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Full name given at registration.
    pub fn full_name(&self) -> &FullName {
        &self.full_name
    }

    /// Phone number used for login.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }
}

#[cfg(test)]
mod tests;
