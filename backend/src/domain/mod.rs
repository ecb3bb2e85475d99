//! Domain primitives, aggregates and services.
//!
//! Purpose: define the strongly typed entities shared by the HTTP and
//! persistence layers, and the services implementing the driving ports.
//! Types document their invariants and serde contracts in their Rustdoc.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: per-request correlation identifier.
//! - User, Food, FoodContent, ConfirmationLog: persisted entities.
//! - Verdict: the sensitivity intersection for one user and one food.
//! - *Service: use-case implementations over the driven ports.

pub mod confirmation;
pub mod error;
pub mod food;
mod food_catalogue_service;
mod food_confirmation_service;
pub mod ids;
pub mod ports;
mod repository_errors;
mod sensitivity_service;
pub mod trace_id;
pub mod user;
mod user_account_service;

pub use self::confirmation::{
    ConfirmationLog, ConfirmationOutcome, NewConfirmationLog, Verdict,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::food::{
    ContentName, Food, FoodContent, FoodName, FoodValidationError, ImageRef, NewFood,
};
pub use self::food_catalogue_service::FoodCatalogueService;
pub use self::food_confirmation_service::{ConfirmationStores, FoodConfirmationService};
pub use self::ids::{ConfirmationLogId, FoodContentId, FoodId, IdValidationError, UserId};
pub use self::sensitivity_service::SensitivityService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{FullName, NewUser, PhoneNumber, User, UserValidationError};
pub use self::user_account_service::UserAccountService;

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use scanfood::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("food not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
