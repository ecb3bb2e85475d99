//! Port for the append-only confirmation log.

use async_trait::async_trait;

use crate::domain::{ConfirmationLog, NewConfirmationLog};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by confirmation log adapters.
    pub enum ConfirmationLogPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "confirmation log connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "confirmation log query failed: {message}",
    }
}

/// Append-only storage for safety evaluations.
///
/// Entries are never updated or deleted once appended.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConfirmationLogRepository: Send + Sync {
    /// Persist a log entry; the store assigns `id` and `confirmed_at`.
    async fn append(
        &self,
        entry: &NewConfirmationLog,
    ) -> Result<ConfirmationLog, ConfirmationLogPersistenceError>;
}
