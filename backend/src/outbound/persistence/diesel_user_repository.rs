//! PostgreSQL-backed `UserRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{FullName, NewUser, PhoneNumber, User, UserId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error, unique_violation};
use super::models::{NewUserRow, UserRow};
use super::pool::{DbPool, PoolError};
use super::schema::users;

/// Diesel-backed user store. Phone uniqueness is enforced by the
/// `users_phone_key` index.
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, |message| UserPersistenceError::connection(message))
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        |message| UserPersistenceError::query(message),
        |message| UserPersistenceError::connection(message),
    )
}

fn row_to_user(row: UserRow) -> Result<User, UserPersistenceError> {
    let full_name = FullName::new(row.full_name)
        .map_err(|err| UserPersistenceError::query(format!("invalid stored full name: {err}")))?;
    let phone = PhoneNumber::new(row.phone)
        .map_err(|err| UserPersistenceError::query(format!("invalid stored phone: {err}")))?;
    Ok(User::new(UserId::from_store(row.id), full_name, phone))
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let new_row = NewUserRow {
            full_name: user.full_name.as_ref(),
            phone: user.phone.as_ref(),
        };
        let row = diesel::insert_into(users::table)
            .values(&new_row)
            .returning(UserRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| match unique_violation(&err) {
                Some(constraint) => {
                    debug!(%constraint, "phone already registered");
                    UserPersistenceError::duplicate_phone(user.phone.as_ref())
                }
                None => diesel_error(err),
            })?;
        row_to_user(row)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        users::table
            .find(id.get())
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(row_to_user)
            .transpose()
    }

    async fn find_by_phone(
        &self,
        phone: &PhoneNumber,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        users::table
            .filter(users::phone.eq(phone.as_ref()))
            .select(UserRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?
            .map(row_to_user)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn stored_rows_convert_to_users() {
        let user = row_to_user(UserRow {
            id: 3,
            full_name: "Alice".into(),
            phone: "555-0100".into(),
        })
        .expect("valid row");
        assert_eq!(user.id().get(), 3);
        assert_eq!(user.phone().as_ref(), "555-0100");
    }

    #[rstest]
    fn corrupt_rows_surface_as_query_errors() {
        let err = row_to_user(UserRow {
            id: 3,
            full_name: "   ".into(),
            phone: "555-0100".into(),
        })
        .expect_err("blank name");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
