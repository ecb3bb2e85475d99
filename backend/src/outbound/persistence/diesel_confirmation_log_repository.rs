//! PostgreSQL-backed `ConfirmationLogRepository` implementation using Diesel
//! ORM.
//!
//! The log row and its offending contents are written in one transaction so
//! a reader never observes a log entry without its content set.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use tracing::debug;

use crate::domain::ports::{ConfirmationLogPersistenceError, ConfirmationLogRepository};
use crate::domain::{
    ConfirmationLog, ConfirmationLogId, FoodContentId, FoodId, NewConfirmationLog, UserId,
};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ConfirmationLogContentRow, ConfirmationLogRow, NewConfirmationLogRow};
use super::pool::{DbPool, PoolError};
use super::schema::{confirmation_log_contents, confirmation_logs};

/// Diesel-backed append-only confirmation log.
#[derive(Clone)]
pub struct DieselConfirmationLogRepository {
    pool: DbPool,
}

impl DieselConfirmationLogRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ConfirmationLogPersistenceError {
    map_pool_error(error, |message| {
        ConfirmationLogPersistenceError::connection(message)
    })
}

fn diesel_error(error: DieselError) -> ConfirmationLogPersistenceError {
    map_diesel_error(
        error,
        |message| ConfirmationLogPersistenceError::query(message),
        |message| ConfirmationLogPersistenceError::connection(message),
    )
}

fn row_to_log(row: ConfirmationLogRow, sensitive_contents: Vec<FoodContentId>) -> ConfirmationLog {
    ConfirmationLog {
        id: ConfirmationLogId::from_store(row.id),
        user_id: UserId::from_store(row.user_id),
        food_id: FoodId::from_store(row.food_id),
        confirmed_at: row.confirmed_at,
        result: row.result,
        sensitive_contents,
    }
}

#[async_trait]
impl ConfirmationLogRepository for DieselConfirmationLogRepository {
    async fn append(
        &self,
        entry: &NewConfirmationLog,
    ) -> Result<ConfirmationLog, ConfirmationLogPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = conn
            .transaction(|conn| {
                async move {
                    let row = diesel::insert_into(confirmation_logs::table)
                        .values(&NewConfirmationLogRow {
                            user_id: entry.user_id().get(),
                            food_id: entry.food_id().get(),
                            result: entry.result(),
                        })
                        .returning(ConfirmationLogRow::as_returning())
                        .get_result(conn)
                        .await?;

                    let contents: Vec<ConfirmationLogContentRow> = entry
                        .sensitive_content_ids()
                        .iter()
                        .map(|id| ConfirmationLogContentRow {
                            confirmation_log_id: row.id,
                            food_content_id: id.get(),
                        })
                        .collect();
                    if !contents.is_empty() {
                        diesel::insert_into(confirmation_log_contents::table)
                            .values(&contents)
                            .execute(conn)
                            .await?;
                    }
                    Ok::<_, DieselError>(row)
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;
        debug!(log_id = row.id, result = row.result, "appended confirmation log");
        Ok(row_to_log(row, entry.sensitive_content_ids().to_vec()))
    }
}
