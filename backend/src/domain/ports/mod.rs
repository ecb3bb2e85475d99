//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters; driving
//! ports are implemented by the domain services and called by inbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod confirmation_log_repository;
mod food_catalogue;
mod food_confirmation;
mod food_repository;
mod sensitivities;
mod sensitivity_repository;
mod user_accounts;
mod user_repository;

#[cfg(test)]
pub use confirmation_log_repository::MockConfirmationLogRepository;
pub use confirmation_log_repository::{
    ConfirmationLogPersistenceError, ConfirmationLogRepository,
};
#[cfg(test)]
pub use food_catalogue::{MockFoodCatalogueCommand, MockFoodCatalogueQuery};
pub use food_catalogue::{FoodCatalogueCommand, FoodCatalogueQuery};
#[cfg(test)]
pub use food_confirmation::MockFoodConfirmation;
pub use food_confirmation::FoodConfirmation;
#[cfg(test)]
pub use food_repository::MockFoodRepository;
pub use food_repository::{FoodPersistenceError, FoodRepository};
#[cfg(test)]
pub use sensitivities::{MockSensitivitiesCommand, MockSensitivitiesQuery};
pub use sensitivities::{
    AddSensitivitiesRequest, AddedSensitivities, SensitivitiesCommand, SensitivitiesQuery,
    UserSensitivities,
};
#[cfg(test)]
pub use sensitivity_repository::MockSensitivityRepository;
pub use sensitivity_repository::{SensitivityPersistenceError, SensitivityRepository};
#[cfg(test)]
pub use user_accounts::MockUserAccounts;
pub use user_accounts::UserAccounts;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
