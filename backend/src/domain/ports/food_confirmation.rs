//! Driving port for checking whether a food is safe for a user.

use async_trait::async_trait;

use crate::domain::{ConfirmationOutcome, Error, FoodId, UserId};

/// Sensitivity evaluation use-case.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodConfirmation: Send + Sync {
    /// Evaluate `food_id` for `user_id` and append a confirmation log entry.
    ///
    /// Nothing is persisted when either identifier is unknown.
    async fn confirm(&self, user_id: UserId, food_id: FoodId)
    -> Result<ConfirmationOutcome, Error>;
}
