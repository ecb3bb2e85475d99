//! Driving ports for declaring and listing user sensitivities.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::{Error, FoodContent, FoodContentId, User, UserId};

/// Request to add sensitivities for a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddSensitivitiesRequest {
    pub user_id: UserId,
    /// Submitted ids that can name a content, in submission order.
    pub content_ids: Vec<FoodContentId>,
    /// Number of ids the client sent, including ones that were dropped.
    pub submitted: usize,
}

impl AddSensitivitiesRequest {
    /// Request for ids that are already known to be well formed.
    pub fn new(user_id: UserId, content_ids: Vec<FoodContentId>) -> Self {
        let submitted = content_ids.len();
        Self {
            user_id,
            content_ids,
            submitted,
        }
    }

    /// Request built from raw client ids; non-positive ones are dropped but
    /// still counted as submitted.
    ///
    /// ```
    /// use scanfood::domain::UserId;
    /// use scanfood::domain::ports::AddSensitivitiesRequest;
    ///
    /// let user_id = UserId::new(1).expect("valid id");
    /// let request = AddSensitivitiesRequest::from_submitted(user_id, [0, 3, -2]);
    /// assert_eq!(request.submitted, 3);
    /// assert_eq!(request.content_ids.len(), 1);
    /// ```
    pub fn from_submitted(user_id: UserId, raw: impl IntoIterator<Item = i64>) -> Self {
        let mut submitted = 0;
        let content_ids = raw
            .into_iter()
            .inspect(|_| submitted += 1)
            .filter_map(|id| FoodContentId::new(id).ok())
            .collect();
        Self {
            user_id,
            content_ids,
            submitted,
        }
    }
}

/// Identifiers that were stored, in request order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddedSensitivities {
    pub added_food_content_ids: Vec<FoodContentId>,
}

/// A user with the distinct contents they are sensitive to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserSensitivities {
    pub user: User,
    pub food_content: Vec<FoodContent>,
}

/// Write-side sensitivity use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensitivitiesCommand: Send + Sync {
    /// Add one association per resolvable content id.
    ///
    /// Unknown ids are skipped silently. Fails with an invalid request, checked
    /// in this order: the user is unknown, nothing was submitted, no id
    /// resolves.
    async fn add_sensitivities(
        &self,
        request: AddSensitivitiesRequest,
    ) -> Result<AddedSensitivities, Error>;
}

/// Read-side sensitivity use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SensitivitiesQuery: Send + Sync {
    /// The user and their de-duplicated sensitivities.
    async fn list_sensitivities(&self, user_id: UserId) -> Result<UserSensitivities, Error>;
}
