//! User sensitivity handlers.
//!
//! ```text
//! GET  /api/users/{user_id}/food-sensitivities/
//! POST /api/users/{user_id}/food-sensitivities/add/ {"food_content_ids": [1, 2]}
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::ports::AddSensitivitiesRequest;
use crate::domain::{Error, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{created, ok};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::existing_user_id;

/// Body of an add-sensitivities request.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct AddSensitivitiesBody {
    #[schema(example = json!([1, 2]))]
    pub food_content_ids: Option<Vec<i64>>,
}

/// List the distinct contents a user is sensitive to.
#[utoipa::path(
    get,
    path = "/api/users/{user_id}/food-sensitivities/",
    params(("user_id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User food sensitivities", body = crate::inbound::http::schemas::SensitivitiesEnvelope),
        (status = 404, description = "User not found", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["sensitivities"],
    operation_id = "listSensitivities"
)]
#[get("/users/{user_id}/food-sensitivities/")]
pub async fn list_sensitivities(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let user_id = existing_user_id(path.into_inner())?;
    let listed = state.sensitivities_query.list_sensitivities(user_id).await?;
    Ok(ok("User food sensitivities", listed))
}

/// Declare sensitivities. Unknown content ids are skipped.
#[utoipa::path(
    post,
    path = "/api/users/{user_id}/food-sensitivities/add/",
    params(("user_id" = i64, Path, description = "User identifier")),
    request_body = AddSensitivitiesBody,
    responses(
        (status = 201, description = "User food sensitivities added", body = crate::inbound::http::schemas::AddedSensitivitiesEnvelope),
        (status = 400, description = "Invalid user or no valid ids", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["sensitivities"],
    operation_id = "addSensitivities"
)]
#[post("/users/{user_id}/food-sensitivities/add/")]
pub async fn add_sensitivities(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<AddSensitivitiesBody>,
) -> ApiResult<HttpResponse> {
    let user_id = UserId::new(path.into_inner()).map_err(|_| Error::invalid_request("Invalid user"))?;
    let raw = payload.into_inner().food_content_ids.unwrap_or_default();
    let added = state
        .sensitivities
        .add_sensitivities(AddSensitivitiesRequest::from_submitted(user_id, raw))
        .await?;
    Ok(created("User food sensitivities added", added))
}
