//! Registration and identification-only login.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{UserAccounts, UserRepository};
use crate::domain::{Error, NewUser, PhoneNumber, User};

/// Account service implementing [`UserAccounts`].
#[derive(Clone)]
pub struct UserAccountService<U> {
    users: Arc<U>,
}

impl<U> UserAccountService<U> {
    /// Create a new service over the given user repository.
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl<U> UserAccounts for UserAccountService<U>
where
    U: UserRepository,
{
    async fn register(&self, user: NewUser) -> Result<User, Error> {
        // Phone uniqueness is enforced by the store, so concurrent
        // registrations cannot both succeed.
        let created = self.users.create(&user).await.map_err(Error::from)?;
        info!(user_id = %created.id(), "registered user");
        Ok(created)
    }

    async fn login(&self, phone: &PhoneNumber) -> Result<User, Error> {
        let user = self
            .users
            .find_by_phone(phone)
            .await
            .map_err(Error::from)?
            .ok_or_else(|| Error::not_found("User with this phone number not found."))?;
        debug!(user_id = %user.id(), "identified user by phone");
        Ok(user)
    }
}

#[cfg(test)]
#[path = "user_account_service_tests.rs"]
mod tests;
