//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repositories are thin translators between Diesel rows (`models.rs`,
//! `schema.rs`) and domain types; no business rules live here. Connections
//! come from a `bb8` pool driven by `diesel-async`, and every driver failure
//! is mapped to the owning port's error enum.
//!
//! ```ignore
//! use scanfood::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/scanfood")).await?;
//! let users = DieselUserRepository::new(pool);
//! ```

mod diesel_confirmation_log_repository;
mod diesel_error_mapping;
mod diesel_food_repository;
mod diesel_sensitivity_repository;
mod diesel_user_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_confirmation_log_repository::DieselConfirmationLogRepository;
pub use diesel_food_repository::DieselFoodRepository;
pub use diesel_sensitivity_repository::DieselSensitivityRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DEFAULT_POOL_SIZE, DbPool, PoolConfig, PoolError};
