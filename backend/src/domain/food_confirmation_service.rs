//! Food safety evaluation.
//!
//! Gathers the user's sensitivities and the food's contents once, computes
//! the [`Verdict`] in memory and appends a confirmation log entry recording
//! the offending contents. The log stores the intersection actually shown to
//! the caller, never the user's full sensitivity set.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    ConfirmationLogRepository, FoodConfirmation, FoodRepository, SensitivityRepository,
    UserRepository,
};
use crate::domain::{
    ConfirmationOutcome, Error, FoodId, NewConfirmationLog, UserId, Verdict,
};

/// Stores consulted by [`FoodConfirmationService`].
pub struct ConfirmationStores<U, F, S, L> {
    pub users: Arc<U>,
    pub foods: Arc<F>,
    pub sensitivities: Arc<S>,
    pub logs: Arc<L>,
}

/// Evaluation service implementing [`FoodConfirmation`].
pub struct FoodConfirmationService<U, F, S, L> {
    users: Arc<U>,
    foods: Arc<F>,
    sensitivities: Arc<S>,
    logs: Arc<L>,
}

impl<U, F, S, L> FoodConfirmationService<U, F, S, L> {
    /// Create a new service over the given stores.
    pub fn new(stores: ConfirmationStores<U, F, S, L>) -> Self {
        let ConfirmationStores {
            users,
            foods,
            sensitivities,
            logs,
        } = stores;
        Self {
            users,
            foods,
            sensitivities,
            logs,
        }
    }
}

impl<U, F, S, L> Clone for FoodConfirmationService<U, F, S, L> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            foods: Arc::clone(&self.foods),
            sensitivities: Arc::clone(&self.sensitivities),
            logs: Arc::clone(&self.logs),
        }
    }
}

#[async_trait]
impl<U, F, S, L> FoodConfirmation for FoodConfirmationService<U, F, S, L>
where
    U: UserRepository,
    F: FoodRepository,
    S: SensitivityRepository,
    L: ConfirmationLogRepository,
{
    async fn confirm(
        &self,
        user_id: UserId,
        food_id: FoodId,
    ) -> Result<ConfirmationOutcome, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(Error::from)?
            .ok_or_else(|| Error::not_found("User not found"))?;
        let food = self
            .foods
            .find_food(food_id)
            .await
            .map_err(Error::from)?
            .ok_or_else(|| Error::not_found("Food not found"))?;

        let sensitivities = self
            .sensitivities
            .contents_for_user(user_id)
            .await
            .map_err(Error::from)?;
        let verdict = Verdict::evaluate(&sensitivities, &food);

        let entry = NewConfirmationLog::from_verdict(user_id, food_id, &verdict);
        let log = self.logs.append(&entry).await.map_err(Error::from)?;
        info!(
            %user_id,
            %food_id,
            log_id = %log.id,
            result = log.result,
            "recorded food confirmation"
        );
        Ok(ConfirmationOutcome {
            log,
            sensitive_contents: verdict.into_sensitive_contents(),
        })
    }
}

#[cfg(test)]
#[path = "food_confirmation_service_tests.rs"]
mod tests;
