//! Declaring and listing a user's food sensitivities.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    AddSensitivitiesRequest, AddedSensitivities, FoodRepository, SensitivitiesCommand,
    SensitivitiesQuery, SensitivityRepository, UserRepository, UserSensitivities,
};
use crate::domain::{Error, User, UserId};

/// Sensitivity service implementing the sensitivity driving ports.
#[derive(Clone)]
pub struct SensitivityService<U, F, S> {
    users: Arc<U>,
    foods: Arc<F>,
    sensitivities: Arc<S>,
}

impl<U, F, S> SensitivityService<U, F, S> {
    /// Create a new service over the user, food and sensitivity stores.
    pub fn new(users: Arc<U>, foods: Arc<F>, sensitivities: Arc<S>) -> Self {
        Self {
            users,
            foods,
            sensitivities,
        }
    }
}

impl<U, F, S> SensitivityService<U, F, S>
where
    U: UserRepository,
{
    async fn find_user(&self, user_id: UserId) -> Result<Option<User>, Error> {
        self.users.find_by_id(user_id).await.map_err(Error::from)
    }
}

#[async_trait]
impl<U, F, S> SensitivitiesCommand for SensitivityService<U, F, S>
where
    U: UserRepository,
    F: FoodRepository,
    S: SensitivityRepository,
{
    async fn add_sensitivities(
        &self,
        request: AddSensitivitiesRequest,
    ) -> Result<AddedSensitivities, Error> {
        let AddSensitivitiesRequest {
            user_id,
            content_ids,
            submitted,
        } = request;
        if self.find_user(user_id).await?.is_none() {
            return Err(Error::invalid_request("Invalid user"));
        }
        if submitted == 0 {
            return Err(Error::invalid_request(
                "Invalid request. food_content_ids should be a list",
            ));
        }

        let known = if content_ids.is_empty() {
            Vec::new()
        } else {
            self.foods
                .find_contents(&content_ids)
                .await
                .map_err(Error::from)?
        };
        let resolvable: Vec<_> = content_ids
            .into_iter()
            .filter(|id| known.iter().any(|content| content.id == *id))
            .collect();
        if resolvable.is_empty() {
            return Err(Error::invalid_request("No valid food content IDs found"));
        }

        for content_id in &resolvable {
            self.sensitivities
                .add(user_id, *content_id)
                .await
                .map_err(Error::from)?;
        }
        info!(%user_id, added = resolvable.len(), "added sensitivities");
        Ok(AddedSensitivities {
            added_food_content_ids: resolvable,
        })
    }
}

#[async_trait]
impl<U, F, S> SensitivitiesQuery for SensitivityService<U, F, S>
where
    U: UserRepository,
    F: FoodRepository,
    S: SensitivityRepository,
{
    async fn list_sensitivities(&self, user_id: UserId) -> Result<UserSensitivities, Error> {
        let user = self
            .find_user(user_id)
            .await?
            .ok_or_else(|| Error::not_found("User not found"))?;
        let food_content = self
            .sensitivities
            .contents_for_user(user_id)
            .await
            .map_err(Error::from)?;
        debug!(%user_id, count = food_content.len(), "listed sensitivities");
        Ok(UserSensitivities { user, food_content })
    }
}

#[cfg(test)]
#[path = "sensitivity_service_tests.rs"]
mod tests;
