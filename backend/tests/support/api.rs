//! Shared helpers driving the HTTP API in end-to-end scenarios.

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use scanfood::Trace;
use scanfood::inbound::http::configure_api;
use scanfood::inbound::http::state::HttpState;
use scanfood::outbound::memory::InMemoryStore;

pub async fn init_app(
    store: Arc<InMemoryStore>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    init_app_with_state(HttpState::from_repositories(
        store.clone(),
        store.clone(),
        store.clone(),
        store,
    ))
    .await
}

pub async fn init_app_with_state(
    state: HttpState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(Trace)
            .configure(configure_api),
    )
    .await
}

pub async fn send<S>(app: &S, req: TestRequest) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let res = test::call_service(app, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, serde_json::from_slice(&body).expect("JSON body"))
}

pub async fn register<S>(app: &S, full_name: &str, phone: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        TestRequest::post()
            .uri("/api/register/")
            .set_json(json!({"full_name": full_name, "phone": phone})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "register failed: {body}");
    body["data"]["id"].as_i64().expect("user id")
}

pub async fn create_content<S>(app: &S, name: &str) -> i64
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        TestRequest::post()
            .uri("/api/admin/food-contents/")
            .set_json(json!({"name": name})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "content failed: {body}");
    body["data"]["id"].as_i64().expect("content id")
}

pub async fn create_food<S>(app: &S, name: &str, contents: &[i64]) -> i64
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let (status, body) = send(
        app,
        TestRequest::post().uri("/api/admin/foods/").set_json(json!({
            "name": name,
            "image": format!("foods/{}.jpg", name.to_lowercase()),
            "contents": contents,
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "food failed: {body}");
    body["data"]["id"].as_i64().expect("food id")
}

pub async fn add_sensitivities<S>(app: &S, user_id: i64, ids: &[i64]) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    send(
        app,
        TestRequest::post()
            .uri(&format!("/api/users/{user_id}/food-sensitivities/add/"))
            .set_json(json!({"food_content_ids": ids})),
    )
    .await
}

pub async fn confirm<S>(app: &S, user_id: i64, food_id: i64) -> (StatusCode, Value)
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    send(
        app,
        TestRequest::post()
            .uri(&format!("/api/foods/{food_id}/confirm/"))
            .set_json(json!({"user_id": user_id})),
    )
    .await
}
