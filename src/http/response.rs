//! Response encoding.
//!
//! # Responsibilities
//! - Serialize the closed set of reply payloads to JSON
//! - Wrap errors in the `{"error": ...}` envelope
//!
//! # Design Decisions
//! - Payloads are a closed enum rather than `serde_json::Value`, so a
//!   handler cannot reply with an unplanned shape
//! - A serialization failure writes the failure text into the body of the
//!   already-started response; the status and content type stand
//! - `error` with no error value emits 400 with a JSON `null` body

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::store::User;

/// The closed set of success payloads the service replies with.
#[derive(Debug)]
pub enum Payload {
    /// A single user record.
    Record(User),
    /// All records in insertion order.
    Records(Vec<User>),
    /// A literal confirmation string, e.g. `"Created"`.
    Confirmation(&'static str),
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    error: String,
}

/// Encode a success payload at the given status.
pub fn reply(status: StatusCode, payload: &Payload) -> Response {
    match payload {
        Payload::Record(user) => encode(status, user),
        Payload::Records(users) => encode(status, users),
        Payload::Confirmation(message) => encode(status, message),
    }
}

/// Encode an error at the given status.
///
/// A present error is wrapped as `{"error": <display>}`; an absent one
/// emits 400 with a `null` body.
pub fn error<E: std::fmt::Display>(status: StatusCode, err: Option<&E>) -> Response {
    match err {
        Some(err) => encode(
            status,
            &ErrorEnvelope {
                error: err.to_string(),
            },
        ),
        None => encode(StatusCode::BAD_REQUEST, &serde_json::Value::Null),
    }
}

fn encode<T: Serialize>(status: StatusCode, value: &T) -> Response {
    let headers = [(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    )];
    match serde_json::to_vec(value) {
        Ok(buf) => (status, headers, buf).into_response(),
        // The status line and headers are already decided at this point;
        // the failure text becomes the body.
        Err(err) => (status, headers, Body::from(err.to_string())).into_response(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_string(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn record_payload_serializes_as_json_object() {
        let user = User {
            id: 1,
            username: "a".to_string(),
            email: "a@x.com".to_string(),
        };
        let response = reply(StatusCode::OK, &Payload::Record(user));
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(
            body_string(response).await,
            r#"{"id":1,"username":"a","email":"a@x.com"}"#
        );
    }

    #[tokio::test]
    async fn confirmation_serializes_as_json_string() {
        let response = reply(StatusCode::CREATED, &Payload::Confirmation("Created"));
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(body_string(response).await, r#""Created""#);
    }

    #[tokio::test]
    async fn records_serialize_as_json_array() {
        let response = reply(StatusCode::OK, &Payload::Records(vec![]));
        assert_eq!(body_string(response).await, "[]");
    }

    #[tokio::test]
    async fn present_error_is_wrapped_in_envelope() {
        let response = error(
            StatusCode::NOT_FOUND,
            Some(&crate::store::StoreError::NotFound),
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_string(response).await, r#"{"error":"User Not Found"}"#);
    }

    #[tokio::test]
    async fn absent_error_is_bad_request_with_null_body() {
        let response = error::<crate::store::StoreError>(StatusCode::NOT_FOUND, None);
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_string(response).await, "null");
    }
}
