//! Driving ports for reading and administering the food catalogue.

use async_trait::async_trait;

use crate::domain::{ContentName, Error, Food, FoodContent, FoodId, NewFood};

/// Read-side catalogue use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodCatalogueQuery: Send + Sync {
    /// Fetch a single food.
    async fn get_food(&self, id: FoodId) -> Result<Food, Error>;

    /// Every known food content.
    async fn list_contents(&self) -> Result<Vec<FoodContent>, Error>;
}

/// Administration use-cases for the catalogue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodCatalogueCommand: Send + Sync {
    /// Create a content label.
    async fn create_content(&self, name: ContentName) -> Result<FoodContent, Error>;

    /// Create a food. Every referenced content must exist.
    async fn create_food(&self, food: NewFood) -> Result<Food, Error>;
}
