//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` and depend only on driving ports,
//! so they can be exercised against any store.

use std::sync::Arc;

use crate::domain::ports::{
    ConfirmationLogRepository, FoodCatalogueCommand, FoodCatalogueQuery, FoodConfirmation,
    FoodRepository, SensitivitiesCommand, SensitivitiesQuery, SensitivityRepository,
    UserAccounts, UserRepository,
};
use crate::domain::{
    ConfirmationStores, FoodCatalogueService, FoodConfirmationService, SensitivityService,
    UserAccountService,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub accounts: Arc<dyn UserAccounts>,
    pub catalogue: Arc<dyn FoodCatalogueQuery>,
    pub catalogue_admin: Arc<dyn FoodCatalogueCommand>,
    pub sensitivities: Arc<dyn SensitivitiesCommand>,
    pub sensitivities_query: Arc<dyn SensitivitiesQuery>,
    pub confirmation: Arc<dyn FoodConfirmation>,
}

impl HttpState {
    /// Wire the domain services over one set of driven adapters.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use scanfood::inbound::http::state::HttpState;
    /// use scanfood::outbound::memory::InMemoryStore;
    ///
    /// let store = Arc::new(InMemoryStore::default());
    /// let _state = HttpState::from_repositories(store.clone(), store.clone(), store.clone(), store);
    /// ```
    pub fn from_repositories<U, F, S, L>(
        users: Arc<U>,
        foods: Arc<F>,
        sensitivities: Arc<S>,
        logs: Arc<L>,
    ) -> Self
    where
        U: UserRepository + 'static,
        F: FoodRepository + 'static,
        S: SensitivityRepository + 'static,
        L: ConfirmationLogRepository + 'static,
    {
        let catalogue = Arc::new(FoodCatalogueService::new(foods.clone()));
        let sensitivity_service = Arc::new(SensitivityService::new(
            users.clone(),
            foods.clone(),
            sensitivities.clone(),
        ));
        Self {
            accounts: Arc::new(UserAccountService::new(users.clone())),
            catalogue: catalogue.clone(),
            catalogue_admin: catalogue,
            sensitivities: sensitivity_service.clone(),
            sensitivities_query: sensitivity_service,
            confirmation: Arc::new(FoodConfirmationService::new(ConfirmationStores {
                users,
                foods,
                sensitivities,
                logs,
            })),
        }
    }
}
