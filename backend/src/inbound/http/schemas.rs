//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of `utoipa` derives. The wrappers below mirror
//! their serialised shape so the generated document can describe request
//! and response bodies, including the `{success, message, data}` envelope.

use utoipa::ToSchema;

use crate::inbound::http::foods::ConfirmationResponse;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed input or a missing required parameter.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// A write violated a field or uniqueness constraint.
    #[schema(rename = "validation_error")]
    ValidationError,
    /// The referenced entity does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The data store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected failure; the message is redacted.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Payload of a failed request.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorDataSchema {
    code: ErrorCodeSchema,
    /// Correlation identifier, also sent as the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Offending field and reason, when known.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::User`].
#[derive(ToSchema)]
#[schema(as = crate::domain::User)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Ada Lovelace")]
    full_name: String,
    #[schema(example = "555-0100")]
    phone: String,
}

/// OpenAPI schema for [`crate::domain::FoodContent`].
#[derive(ToSchema)]
#[schema(as = crate::domain::FoodContent)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FoodContentSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "gluten")]
    name: String,
}

/// OpenAPI schema for [`crate::domain::Food`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Food)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct FoodSchema {
    #[schema(example = 1)]
    id: i64,
    #[schema(example = "Pizza")]
    name: String,
    #[schema(example = "foods/pizza.jpg")]
    image: String,
    /// Content ids in attachment order.
    #[schema(example = json!([1, 2]))]
    contents: Vec<i64>,
}

/// A user together with the contents they are sensitive to.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserSensitivitiesSchema {
    user: UserSchema,
    food_content: Vec<FoodContentSchema>,
}

#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct AddedSensitivitiesSchema {
    /// Ids that resolved to known contents, in request order.
    #[schema(example = json!([1, 2]))]
    added_food_content_ids: Vec<i64>,
}

macro_rules! envelope_schema {
    ($(#[$meta:meta])* $name:ident, $data:ty) => {
        $(#[$meta])*
        #[derive(ToSchema)]
        #[expect(
            dead_code,
            reason = "Used only for OpenAPI schema generation via utoipa"
        )]
        pub struct $name {
            success: bool,
            message: String,
            data: $data,
        }
    };
}

envelope_schema!(
    /// Envelope returned by the account endpoints.
    UserEnvelope,
    UserSchema
);
envelope_schema!(FoodEnvelope, FoodSchema);
envelope_schema!(ContentEnvelope, FoodContentSchema);
envelope_schema!(ContentListEnvelope, Vec<FoodContentSchema>);
envelope_schema!(ConfirmationEnvelope, ConfirmationResponse);
envelope_schema!(SensitivitiesEnvelope, UserSensitivitiesSchema);
envelope_schema!(AddedSensitivitiesEnvelope, AddedSensitivitiesSchema);
envelope_schema!(
    /// Envelope returned for every failure; `success` is always `false`.
    ErrorEnvelope,
    ErrorDataSchema
);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[rstest]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "validation_error",
            "not_found",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[rstest]
    fn domain_schemas_use_domain_names() {
        // utoipa replaces :: with . in schema names
        assert_eq!(UserSchema::name(), "crate.domain.User");
        assert_eq!(FoodSchema::name(), "crate.domain.Food");
        assert_eq!(FoodContentSchema::name(), "crate.domain.FoodContent");
    }

    #[rstest]
    fn envelope_schema_has_envelope_fields() {
        let schema_json = schema_to_json::<FoodEnvelope>();
        for field in ["success", "message", "data"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }
}
