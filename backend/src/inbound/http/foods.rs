//! Food detail and safety confirmation handlers.
//!
//! ```text
//! GET  /api/foods/{food_id}/
//! POST /api/foods/{food_id}/confirm/ {"user_id": 1}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ConfirmationOutcome;
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{created, ok};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, existing_food_id, existing_user_id, missing_field_error,
};

/// Body of a confirmation request.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct ConfirmRequest {
    #[schema(example = 1)]
    pub user_id: Option<i64>,
}

/// Result of a confirmation as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConfirmationResponse {
    /// `true` when the food is safe for the user.
    pub result: bool,
    /// Names of the food's contents the user is sensitive to.
    pub sensitive_contents: Vec<String>,
    pub confirmation_log_id: i64,
    pub confirmed_at: DateTime<Utc>,
}

impl From<ConfirmationOutcome> for ConfirmationResponse {
    fn from(outcome: ConfirmationOutcome) -> Self {
        Self {
            result: outcome.result(),
            sensitive_contents: outcome
                .sensitive_contents
                .into_iter()
                .map(|content| content.name.into())
                .collect(),
            confirmation_log_id: outcome.log.id.get(),
            confirmed_at: outcome.log.confirmed_at,
        }
    }
}

/// Fetch a food with its content ids.
#[utoipa::path(
    get,
    path = "/api/foods/{food_id}/",
    params(("food_id" = i64, Path, description = "Food identifier")),
    responses(
        (status = 200, description = "Food details", body = crate::inbound::http::schemas::FoodEnvelope),
        (status = 404, description = "Food not found", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["foods"],
    operation_id = "getFood"
)]
#[get("/foods/{food_id}/")]
pub async fn get_food(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let food_id = existing_food_id(path.into_inner())?;
    let food = state.catalogue.get_food(food_id).await?;
    Ok(ok("Food details", food))
}

/// Check a food against a user's sensitivities and log the outcome.
#[utoipa::path(
    post,
    path = "/api/foods/{food_id}/confirm/",
    params(("food_id" = i64, Path, description = "Food identifier")),
    request_body = ConfirmRequest,
    responses(
        (status = 201, description = "Confirmation log created", body = crate::inbound::http::schemas::ConfirmationEnvelope),
        (status = 400, description = "user_id missing", body = crate::inbound::http::schemas::ErrorEnvelope),
        (status = 404, description = "User or food not found", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["foods"],
    operation_id = "confirmFood"
)]
#[post("/foods/{food_id}/confirm/")]
pub async fn confirm_food(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<ConfirmRequest>,
) -> ApiResult<HttpResponse> {
    let raw_user = payload
        .into_inner()
        .user_id
        .ok_or_else(|| missing_field_error(FieldName::new("user_id"), "Invalid request"))?;
    let user_id = existing_user_id(raw_user)?;
    let food_id = existing_food_id(path.into_inner())?;
    let outcome = state.confirmation.confirm(user_id, food_id).await?;
    Ok(created(
        "Confirmation log created",
        ConfirmationResponse::from(outcome),
    ))
}
