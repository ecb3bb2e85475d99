//! Food catalogue reads and administration.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::info;

use crate::domain::ports::{FoodCatalogueCommand, FoodCatalogueQuery, FoodRepository};
use crate::domain::{ContentName, Error, Food, FoodContent, FoodContentId, FoodId, NewFood};

/// Catalogue service implementing the catalogue driving ports.
#[derive(Clone)]
pub struct FoodCatalogueService<F> {
    foods: Arc<F>,
}

impl<F> FoodCatalogueService<F> {
    /// Create a new service over the given food repository.
    pub fn new(foods: Arc<F>) -> Self {
        Self { foods }
    }
}

fn unknown_contents(requested: &[FoodContentId], found: &[FoodContent]) -> Vec<FoodContentId> {
    requested
        .iter()
        .copied()
        .filter(|id| !found.iter().any(|content| content.id == *id))
        .collect()
}

#[async_trait]
impl<F> FoodCatalogueQuery for FoodCatalogueService<F>
where
    F: FoodRepository,
{
    async fn get_food(&self, id: FoodId) -> Result<Food, Error> {
        self.foods
            .find_food(id)
            .await
            .map_err(Error::from)?
            .ok_or_else(|| Error::not_found("Food not found"))
    }

    async fn list_contents(&self) -> Result<Vec<FoodContent>, Error> {
        self.foods.list_contents().await.map_err(Error::from)
    }
}

#[async_trait]
impl<F> FoodCatalogueCommand for FoodCatalogueService<F>
where
    F: FoodRepository,
{
    async fn create_content(&self, name: ContentName) -> Result<FoodContent, Error> {
        let content = self.foods.create_content(&name).await.map_err(Error::from)?;
        info!(content_id = %content.id, name = %content.name, "created food content");
        Ok(content)
    }

    async fn create_food(&self, food: NewFood) -> Result<Food, Error> {
        if !food.contents().is_empty() {
            let found = self
                .foods
                .find_contents(food.contents())
                .await
                .map_err(Error::from)?;
            let missing = unknown_contents(food.contents(), &found);
            if !missing.is_empty() {
                return Err(
                    Error::validation("food references unknown contents").with_details(json!({
                        "field": "contents",
                        "code": "unknown_content",
                        "ids": missing,
                    })),
                );
            }
        }
        let created = self.foods.create_food(&food).await.map_err(Error::from)?;
        info!(food_id = %created.id, "created food");
        Ok(created)
    }
}

#[cfg(test)]
#[path = "food_catalogue_service_tests.rs"]
mod tests;
