//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

async fn body_of(error: &Error) -> Value {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body()).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::validation("taken"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] expected: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), expected);
}

#[rstest]
#[actix_web::test]
async fn failures_use_the_envelope() {
    let error = Error::validation("phone is already registered")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"field": "phone"}));
    let response = ResponseError::error_response(&error);
    assert_eq!(
        response
            .headers()
            .get(TRACE_ID_HEADER)
            .and_then(|v| v.to_str().ok()),
        Some(TRACE_ID)
    );

    assert_eq!(
        body_of(&error).await,
        json!({
            "success": false,
            "message": "phone is already registered",
            "data": {
                "code": "validation_error",
                "trace_id": TRACE_ID,
                "details": {"field": "phone"},
            },
        })
    );
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted() {
    let error = Error::internal("connection string leaked")
        .with_trace_id(TRACE_ID)
        .with_details(json!({"secret": "x"}));
    let body = body_of(&error).await;
    assert_eq!(body["message"], REDACTED_MESSAGE);
    assert_eq!(body["data"]["code"], "internal_error");
    assert_eq!(body["data"]["trace_id"], TRACE_ID);
    assert!(body["data"].get("details").is_none());
}
