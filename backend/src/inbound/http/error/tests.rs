//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use rstest::rstest;

async fn body_of(error: &Error) -> ErrorBody {
    let response = ResponseError::error_response(error);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    serde_json::from_slice(&bytes).expect("error body deserialises")
}

#[rstest]
#[case(Error::invalid_request("title missing"), StatusCode::BAD_REQUEST)]
#[case(Error::malformed_id(), StatusCode::BAD_REQUEST)]
#[case(Error::duplicate_username(), StatusCode::BAD_REQUEST)]
#[case(Error::invalid_token(), StatusCode::UNAUTHORIZED)]
#[case(Error::missing_identity(), StatusCode::UNAUTHORIZED)]
#[case(Error::not_creator(), StatusCode::UNAUTHORIZED)]
#[case(Error::invalid_credentials(), StatusCode::UNAUTHORIZED)]
#[case(Error::not_found("blog not found"), StatusCode::NOT_FOUND)]
#[case(Error::service_unavailable("store down"), StatusCode::SERVICE_UNAVAILABLE)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] error: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&error), status);
}

#[rstest]
#[case(Error::malformed_id(), "malformatted id")]
#[case(Error::invalid_token(), "invalid token")]
#[case(Error::missing_identity(), "token missing or invalid")]
#[case(Error::not_creator(), "a blog can be deleted only by its creator")]
#[case(Error::invalid_credentials(), "invalid username or password")]
#[case(Error::duplicate_username(), "username must be unique")]
#[case(Error::invalid_request("url missing"), "url missing")]
#[actix_web::test]
async fn body_carries_the_message(#[case] error: Error, #[case] message: &str) {
    assert_eq!(body_of(&error).await.error, message);
}

#[rstest]
#[actix_web::test]
async fn internal_details_are_redacted() {
    let body = body_of(&Error::internal("connection string postgres://secret")).await;
    assert_eq!(body.error, REDACTED_MESSAGE);
}

#[rstest]
#[actix_web::test]
async fn outage_details_are_redacted() {
    let error = Error::service_unavailable("user repository unavailable: db.internal:5432 refused");
    let body = body_of(&error).await;
    assert_eq!(body.error, UNAVAILABLE_MESSAGE);
    assert!(!body.error.contains("db.internal"));
}

#[rstest]
#[actix_web::test]
async fn json_payload_errors_become_bad_requests() {
    let req = actix_web::test::TestRequest::default().to_http_request();
    let err = json_error_handler(JsonPayloadError::ContentType, &req);
    assert_eq!(err.as_response_error().status_code(), StatusCode::BAD_REQUEST);
}
