//! Registration and login handlers.
//!
//! ```text
//! POST /api/register/ {"full_name":"Alice","phone":"555-0100"}
//! POST /api/login/ {"phone":"555-0100"}
//! ```
//!
//! Login identifies a user by phone number alone. No credential is
//! requested or checked.

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};

use crate::domain::{Error, FullName, NewUser, PhoneNumber};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{created, ok};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, map_user_validation_error, missing_field_error, require,
};

const FULL_NAME: FieldName = FieldName::new("full_name");
const PHONE: FieldName = FieldName::new("phone");

/// Registration body. Fields are optional so absence is reported per field.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Alice Example")]
    pub full_name: Option<String>,
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
}

impl RegisterRequest {
    fn into_new_user(self) -> ApiResult<NewUser> {
        let full_name = require(self.full_name, FULL_NAME)?;
        let phone = require(self.phone, PHONE)?;
        Ok(NewUser {
            full_name: FullName::new(full_name).map_err(map_user_validation_error)?,
            phone: PhoneNumber::new(phone).map_err(map_user_validation_error)?,
        })
    }
}

/// Login body.
#[derive(Debug, Default, Deserialize, Serialize, utoipa::ToSchema)]
pub struct LoginRequest {
    #[schema(example = "555-0100")]
    pub phone: Option<String>,
}

/// Register a new user.
#[utoipa::path(
    post,
    path = "/api/register/",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = crate::inbound::http::schemas::UserEnvelope),
        (status = 400, description = "Missing field or phone already registered", body = crate::inbound::http::schemas::ErrorEnvelope),
        (status = 503, description = "Store unavailable", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "registerUser"
)]
#[post("/register/")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegisterRequest>,
) -> ApiResult<HttpResponse> {
    let new_user = payload.into_inner().into_new_user()?;
    let user = state.accounts.register(new_user).await?;
    Ok(created("User created successfully.", user))
}

/// Identify a user by phone number.
#[utoipa::path(
    post,
    path = "/api/login/",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "User identified", body = crate::inbound::http::schemas::UserEnvelope),
        (status = 400, description = "Phone missing", body = crate::inbound::http::schemas::ErrorEnvelope),
        (status = 404, description = "No user with that phone", body = crate::inbound::http::schemas::ErrorEnvelope)
    ),
    tags = ["users"],
    operation_id = "login"
)]
#[post("/login/")]
pub async fn login(
    state: web::Data<HttpState>,
    payload: web::Json<LoginRequest>,
) -> ApiResult<HttpResponse> {
    let raw = payload
        .into_inner()
        .phone
        .filter(|phone| !phone.trim().is_empty())
        .ok_or_else(|| missing_field_error(PHONE, "Phone is required."))?;
    // Numbers longer than any stored phone cannot match, so treat them as
    // unknown rather than malformed.
    let phone = PhoneNumber::new(raw)
        .map_err(|_| Error::not_found("User with this phone number not found."))?;
    let user = state.accounts.login(&phone).await?;
    Ok(ok("Login successful.", user))
}
