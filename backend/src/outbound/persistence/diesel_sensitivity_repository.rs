//! PostgreSQL-backed `SensitivityRepository` implementation using Diesel ORM.
//!
//! `user_food_sensitivities` has no uniqueness constraint, so repeated adds
//! store repeated rows; reads select distinct contents through a subquery.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{SensitivityPersistenceError, SensitivityRepository};
use crate::domain::{FoodContent, FoodContentId, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::diesel_food_repository::row_to_content;
use super::models::{FoodContentRow, NewSensitivityRow};
use super::pool::{DbPool, PoolError};
use super::schema::{food_contents, user_food_sensitivities};

/// Diesel-backed sensitivity store.
#[derive(Clone)]
pub struct DieselSensitivityRepository {
    pool: DbPool,
}

impl DieselSensitivityRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> SensitivityPersistenceError {
    map_pool_error(error, |message| SensitivityPersistenceError::connection(message))
}

fn diesel_error(error: diesel::result::Error) -> SensitivityPersistenceError {
    map_diesel_error(
        error,
        |message| SensitivityPersistenceError::query(message),
        |message| SensitivityPersistenceError::connection(message),
    )
}

#[async_trait]
impl SensitivityRepository for DieselSensitivityRepository {
    async fn add(
        &self,
        user_id: UserId,
        content_id: FoodContentId,
    ) -> Result<(), SensitivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::insert_into(user_food_sensitivities::table)
            .values(&NewSensitivityRow {
                user_id: user_id.get(),
                food_content_id: content_id.get(),
            })
            .execute(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(())
    }

    async fn contents_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<FoodContent>, SensitivityPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let declared = user_food_sensitivities::table
            .filter(user_food_sensitivities::user_id.eq(user_id.get()))
            .select(user_food_sensitivities::food_content_id);
        let rows = food_contents::table
            .filter(food_contents::id.eq_any(declared))
            .order(food_contents::id.asc())
            .select(FoodContentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter()
            .map(|row| {
                row_to_content(row)
                    .map_err(|err| SensitivityPersistenceError::query(err.to_string()))
            })
            .collect()
    }
}
