//! Shared helpers for HTTP integration tests.

use actix_web::body::MessageBody;
use actix_web::dev::ServiceResponse;
use actix_web::test as actix_test;
use serde_json::Value;

/// Read a response body as JSON, or `Value::Null` when empty.
pub async fn json_body<B: MessageBody>(response: ServiceResponse<B>) -> Value {
    let body = actix_test::read_body(response).await;
    if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    }
}
