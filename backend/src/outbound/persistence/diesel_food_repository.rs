//! PostgreSQL-backed `FoodRepository` implementation using Diesel ORM.
//!
//! Food contents are attached through `food_contents_foods`; the `position`
//! column keeps them in the order they were supplied at creation.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{FoodPersistenceError, FoodRepository};
use crate::domain::{
    ContentName, Food, FoodContent, FoodContentId, FoodId, FoodName, FoodValidationError, ImageRef,
    NewFood,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    FoodContentLinkRow, FoodContentRow, FoodRow, NewFoodContentRow, NewFoodRow,
};
use super::pool::{DbPool, PoolError};
use super::schema::{food_contents, food_contents_foods, foods};

/// Diesel-backed food catalogue store.
#[derive(Clone)]
pub struct DieselFoodRepository {
    pool: DbPool,
}

impl DieselFoodRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> FoodPersistenceError {
    map_pool_error(error, |message| FoodPersistenceError::connection(message))
}

fn diesel_error(error: DieselError) -> FoodPersistenceError {
    map_diesel_error(
        error,
        |message| FoodPersistenceError::query(message),
        |message| FoodPersistenceError::connection(message),
    )
}

pub(super) fn row_to_content(row: FoodContentRow) -> Result<FoodContent, FoodPersistenceError> {
    let name = ContentName::new(&row.name).map_err(|err| {
        FoodPersistenceError::query(format!("invalid stored content {}: {err}", row.id))
    })?;
    Ok(FoodContent::new(FoodContentId::from_store(row.id), name))
}

fn rows_to_contents(rows: Vec<FoodContentRow>) -> Result<Vec<FoodContent>, FoodPersistenceError> {
    rows.into_iter().map(row_to_content).collect()
}

fn row_to_food(row: FoodRow, content_ids: Vec<i64>) -> Result<Food, FoodPersistenceError> {
    let invalid = |err: FoodValidationError| {
        FoodPersistenceError::query(format!("invalid stored food {}: {err}", row.id))
    };
    Ok(Food {
        id: FoodId::from_store(row.id),
        name: FoodName::new(&row.name).map_err(invalid)?,
        image: ImageRef::new(&row.image).map_err(invalid)?,
        contents: content_ids
            .into_iter()
            .map(FoodContentId::from_store)
            .collect(),
    })
}

#[async_trait]
impl FoodRepository for DieselFoodRepository {
    async fn find_food(&self, id: FoodId) -> Result<Option<Food>, FoodPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let Some(row) = foods::table
            .find(id.get())
            .select(FoodRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
        else {
            return Ok(None);
        };
        let content_ids: Vec<i64> = food_contents_foods::table
            .filter(food_contents_foods::food_id.eq(row.id))
            .order(food_contents_foods::position.asc())
            .select(food_contents_foods::food_content_id)
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        row_to_food(row, content_ids).map(Some)
    }

    async fn list_contents(&self) -> Result<Vec<FoodContent>, FoodPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = food_contents::table
            .order(food_contents::id.asc())
            .select(FoodContentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows_to_contents(rows)
    }

    async fn find_contents(
        &self,
        ids: &[FoodContentId],
    ) -> Result<Vec<FoodContent>, FoodPersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let raw: Vec<i64> = ids.iter().map(|id| id.get()).collect();
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows = food_contents::table
            .filter(food_contents::id.eq_any(raw))
            .order(food_contents::id.asc())
            .select(FoodContentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows_to_contents(rows)
    }

    async fn create_content(
        &self,
        name: &ContentName,
    ) -> Result<FoodContent, FoodPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = diesel::insert_into(food_contents::table)
            .values(&NewFoodContentRow {
                name: name.as_ref(),
            })
            .returning(FoodContentRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(diesel_error)?;
        row_to_content(row)
    }

    async fn create_food(&self, food: &NewFood) -> Result<Food, FoodPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let (row, content_ids) = conn
            .transaction(|conn| {
                async move {
                    let row = diesel::insert_into(foods::table)
                        .values(&NewFoodRow {
                            name: food.name.as_ref(),
                            image: food.image.as_ref(),
                        })
                        .returning(FoodRow::as_returning())
                        .get_result(conn)
                        .await?;

                    let links: Vec<FoodContentLinkRow> = food
                        .contents()
                        .iter()
                        .zip(0_i32..)
                        .map(|(content_id, position)| FoodContentLinkRow {
                            food_id: row.id,
                            food_content_id: content_id.get(),
                            position,
                        })
                        .collect();
                    if !links.is_empty() {
                        diesel::insert_into(food_contents_foods::table)
                            .values(&links)
                            .execute(conn)
                            .await?;
                    }
                    let content_ids = links.iter().map(|link| link.food_content_id).collect();
                    Ok::<_, DieselError>((row, content_ids))
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;
        row_to_food(row, content_ids)
    }
}
