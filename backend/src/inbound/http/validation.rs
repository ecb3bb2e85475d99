//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request bodies deserialise into permissive DTOs with optional fields so
//! that missing input can be reported with a field-level error instead of a
//! generic decode failure.

use serde_json::json;

use crate::domain::{
    Error, FoodContentId, FoodId, FoodValidationError, IdValidationError, UserId,
    UserValidationError,
};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

fn field_error(base: Error, field: &str, code: &str) -> Error {
    base.with_details(json!({ "field": field, "code": code }))
}

/// Missing input shape, reported as an invalid request.
pub(crate) fn missing_field_error(field: FieldName, message: &str) -> Error {
    field_error(
        Error::invalid_request(message),
        field.as_str(),
        "missing_field",
    )
}

/// Missing required field on a write, reported as a validation error.
pub(crate) fn required_field_error(field: FieldName) -> Error {
    let name = field.as_str();
    field_error(
        Error::validation(format!("{name} is required")),
        name,
        "required",
    )
}

/// Take a required write field or fail with a validation error.
pub(crate) fn require<T>(value: Option<T>, field: FieldName) -> Result<T, Error> {
    value.ok_or_else(|| required_field_error(field))
}

pub(crate) fn map_user_validation_error(err: UserValidationError) -> Error {
    field_error(Error::validation(err.to_string()), err.field(), err.code())
}

pub(crate) fn map_food_validation_error(err: FoodValidationError) -> Error {
    let code = match err {
        FoodValidationError::EmptyName { .. } | FoodValidationError::EmptyImage => "required",
        FoodValidationError::NameTooLong { .. } | FoodValidationError::ImageTooLong { .. } => {
            "too_long"
        }
    };
    field_error(Error::validation(err.to_string()), err.field(), code)
}

/// A path identifier that cannot name a stored row resolves to not found.
pub(crate) fn existing_food_id(raw: i64) -> Result<FoodId, Error> {
    FoodId::new(raw).map_err(|_| Error::not_found("Food not found"))
}

pub(crate) fn existing_user_id(raw: i64) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| Error::not_found("User not found"))
}

/// Content ids for administration input, where a bad id fails the request.
pub(crate) fn content_ids(raw: Vec<i64>, field: FieldName) -> Result<Vec<FoodContentId>, Error> {
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            FoodContentId::new(value).map_err(|IdValidationError { value }| {
                Error::validation(format!("{} must contain positive ids", field.as_str()))
                    .with_details(json!({
                        "field": field.as_str(),
                        "index": index,
                        "value": value,
                        "code": "invalid_id",
                    }))
            })
        })
        .collect()
}
