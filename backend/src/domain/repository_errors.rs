//! Translation of driven-port failures into domain errors.
//!
//! Connection problems surface as `service_unavailable`; everything else a
//! store reports is unexpected and becomes `internal`.

use serde_json::json;

use super::Error;
use super::ports::{
    ConfirmationLogPersistenceError, FoodPersistenceError, SensitivityPersistenceError,
    UserPersistenceError,
};

impl From<UserPersistenceError> for Error {
    fn from(error: UserPersistenceError) -> Self {
        match error {
            UserPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("user repository unavailable: {message}"))
            }
            UserPersistenceError::Query { message } => {
                Self::internal(format!("user repository error: {message}"))
            }
            UserPersistenceError::DuplicatePhone { .. } => {
                Self::validation("phone is already registered").with_details(json!({
                    "field": "phone",
                    "code": "duplicate_phone",
                }))
            }
        }
    }
}

impl From<FoodPersistenceError> for Error {
    fn from(error: FoodPersistenceError) -> Self {
        match error {
            FoodPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("food repository unavailable: {message}"))
            }
            FoodPersistenceError::Query { message } => {
                Self::internal(format!("food repository error: {message}"))
            }
        }
    }
}

impl From<SensitivityPersistenceError> for Error {
    fn from(error: SensitivityPersistenceError) -> Self {
        match error {
            SensitivityPersistenceError::Connection { message } => {
                Self::service_unavailable(format!("sensitivity repository unavailable: {message}"))
            }
            SensitivityPersistenceError::Query { message } => {
                Self::internal(format!("sensitivity repository error: {message}"))
            }
        }
    }
}

impl From<ConfirmationLogPersistenceError> for Error {
    fn from(error: ConfirmationLogPersistenceError) -> Self {
        match error {
            ConfirmationLogPersistenceError::Connection { message } => Self::service_unavailable(
                format!("confirmation log repository unavailable: {message}"),
            ),
            ConfirmationLogPersistenceError::Query { message } => {
                Self::internal(format!("confirmation log repository error: {message}"))
            }
        }
    }
}
