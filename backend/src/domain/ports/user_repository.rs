//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{NewUser, PhoneNumber, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// The phone number is already registered to another user.
        DuplicatePhone { phone: String } => "phone {phone} is already registered",
    }
}

/// Storage for registered users.
///
/// Adapters must enforce phone uniqueness atomically and report violations as
/// [`UserPersistenceError::DuplicatePhone`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user, returning it with its assigned identifier.
    async fn create(&self, user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the user registered with `phone`.
    async fn find_by_phone(&self, phone: &PhoneNumber)
    -> Result<Option<User>, UserPersistenceError>;
}
