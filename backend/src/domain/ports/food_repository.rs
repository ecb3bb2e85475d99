//! Port for the food catalogue: foods and their ingredient labels.

use async_trait::async_trait;

use crate::domain::{ContentName, Food, FoodContent, FoodContentId, FoodId, NewFood};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by food repository adapters.
    pub enum FoodPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "food repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "food repository query failed: {message}",
    }
}

/// Read and administration access to foods and food contents.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodRepository: Send + Sync {
    /// Fetch a food together with its content ids.
    async fn find_food(&self, id: FoodId) -> Result<Option<Food>, FoodPersistenceError>;

    /// Every food content, ordered by identifier.
    async fn list_contents(&self) -> Result<Vec<FoodContent>, FoodPersistenceError>;

    /// The subset of `ids` that exist, each returned once, ordered by
    /// identifier.
    async fn find_contents(
        &self,
        ids: &[FoodContentId],
    ) -> Result<Vec<FoodContent>, FoodPersistenceError>;

    /// Insert a new content label.
    async fn create_content(&self, name: &ContentName)
    -> Result<FoodContent, FoodPersistenceError>;

    /// Insert a food and attach its contents. Content ids are expected to
    /// exist already.
    async fn create_food(&self, food: &NewFood) -> Result<Food, FoodPersistenceError>;
}
