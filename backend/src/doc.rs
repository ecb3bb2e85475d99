//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint of the inbound layer together
//! with the schema wrappers from [`crate::inbound::http::schemas`], keeping
//! domain types free of `utoipa` derives. The document is served by Swagger
//! UI in debug builds and printed by the `openapi-dump` binary.

use crate::inbound::http::admin::{CreateContentRequest, CreateFoodRequest};
use crate::inbound::http::foods::{ConfirmRequest, ConfirmationResponse};
use crate::inbound::http::schemas::{
    AddedSensitivitiesEnvelope, AddedSensitivitiesSchema, ConfirmationEnvelope,
    ContentEnvelope, ContentListEnvelope, ErrorCodeSchema, ErrorDataSchema, ErrorEnvelope,
    FoodContentSchema, FoodEnvelope, FoodSchema, SensitivitiesEnvelope, UserEnvelope,
    UserSchema, UserSensitivitiesSchema,
};
use crate::inbound::http::sensitivities::AddSensitivitiesBody;
use crate::inbound::http::users::{LoginRequest, RegisterRequest};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ScanFood backend API",
        description = "Registration, food catalogue and per-user food sensitivity checks."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::register,
        crate::inbound::http::users::login,
        crate::inbound::http::foods::get_food,
        crate::inbound::http::foods::confirm_food,
        crate::inbound::http::contents::list_contents,
        crate::inbound::http::sensitivities::list_sensitivities,
        crate::inbound::http::sensitivities::add_sensitivities,
        crate::inbound::http::admin::create_content,
        crate::inbound::http::admin::create_food,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserSchema,
        FoodSchema,
        FoodContentSchema,
        UserSensitivitiesSchema,
        AddedSensitivitiesSchema,
        ErrorCodeSchema,
        ErrorDataSchema,
        UserEnvelope,
        FoodEnvelope,
        ContentEnvelope,
        ContentListEnvelope,
        ConfirmationEnvelope,
        SensitivitiesEnvelope,
        AddedSensitivitiesEnvelope,
        ErrorEnvelope,
        RegisterRequest,
        LoginRequest,
        ConfirmRequest,
        ConfirmationResponse,
        AddSensitivitiesBody,
        CreateContentRequest,
        CreateFoodRequest,
    )),
    tags(
        (name = "users", description = "Registration and phone-number login"),
        (name = "foods", description = "Food catalogue and safety confirmation"),
        (name = "sensitivities", description = "Per-user food sensitivities"),
        (name = "admin", description = "Catalogue administration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
