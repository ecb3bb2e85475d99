//! Response envelope shared by every API endpoint.
//!
//! ```json
//! {"success": true, "message": "Food details", "data": {"id": 1, ...}}
//! {"success": false, "message": "Food not found", "data": {"code": "not_found"}}
//! ```

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::ErrorCode;

/// `{success, message, data}` wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

/// Payload carried in the `data` field of a failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorData {
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T: Serialize> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }

    fn into_response(self, status: StatusCode) -> HttpResponse {
        HttpResponse::build(status).json(self)
    }
}

/// `200 OK` with a success envelope.
pub fn ok<T: Serialize>(message: &str, data: T) -> HttpResponse {
    Envelope::success(message, data).into_response(StatusCode::OK)
}

/// `201 Created` with a success envelope.
pub fn created<T: Serialize>(message: &str, data: T) -> HttpResponse {
    Envelope::success(message, data).into_response(StatusCode::CREATED)
}
