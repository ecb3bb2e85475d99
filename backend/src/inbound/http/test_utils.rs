//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::Value;

use crate::Trace;
use crate::domain::ports::{
    MockFoodCatalogueCommand, MockFoodCatalogueQuery, MockFoodConfirmation,
    MockSensitivitiesCommand, MockSensitivitiesQuery, MockUserAccounts,
};
use crate::inbound::http::configure_api;
use crate::inbound::http::state::HttpState;
use crate::outbound::memory::InMemoryStore;

/// App serving the API over a fresh in-memory store.
pub fn memory_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let store = Arc::new(InMemoryStore::default());
    app_with_state(HttpState::from_repositories(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    ))
}

/// State whose ports all panic when called; override the field under test.
pub fn unexpected_state() -> HttpState {
    HttpState {
        accounts: Arc::new(MockUserAccounts::new()),
        catalogue: Arc::new(MockFoodCatalogueQuery::new()),
        catalogue_admin: Arc::new(MockFoodCatalogueCommand::new()),
        sensitivities: Arc::new(MockSensitivitiesCommand::new()),
        sensitivities_query: Arc::new(MockSensitivitiesQuery::new()),
        confirmation: Arc::new(MockFoodConfirmation::new()),
    }
}

/// App serving the API over `state`.
pub fn app_with_state(
    state: HttpState,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .configure(configure_api)
}

/// Send `req` and decode the JSON body.
pub async fn call_json<S>(app: &S, req: test::TestRequest) -> (StatusCode, Value)
where
    S: Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    let value = serde_json::from_slice(&body).expect("response body is JSON");
    (status, value)
}
