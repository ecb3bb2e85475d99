//! Driving port for registration and phone-number login.
//!
//! Login is identification only: presenting a registered phone number is
//! enough to obtain the user record. No credential is checked.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, PhoneNumber, User};

/// Domain use-case port for user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Register a new user. Fails with a validation error when the phone is
    /// already taken.
    async fn register(&self, user: NewUser) -> Result<User, Error>;

    /// Look up the user registered with `phone`. Fails with not found when
    /// nobody uses that number.
    async fn login(&self, phone: &PhoneNumber) -> Result<User, Error>;
}
