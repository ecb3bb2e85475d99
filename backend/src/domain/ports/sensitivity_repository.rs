//! Port for user ↔ food content sensitivity associations.

use async_trait::async_trait;

use crate::domain::{FoodContent, FoodContentId, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by sensitivity repository adapters.
    pub enum SensitivityPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "sensitivity repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "sensitivity repository query failed: {message}",
    }
}

/// Storage for declared sensitivities.
///
/// Associations are never de-duplicated on write: adding the same pair twice
/// stores two rows. Reads collapse duplicates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensitivityRepository: Send + Sync {
    /// Record that `user_id` is sensitive to `content_id`.
    async fn add(
        &self,
        user_id: UserId,
        content_id: FoodContentId,
    ) -> Result<(), SensitivityPersistenceError>;

    /// Distinct contents the user is sensitive to, ordered by identifier.
    async fn contents_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FoodContent>, SensitivityPersistenceError>;
}
