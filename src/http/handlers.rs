//! Endpoint handlers.
//!
//! # Responsibilities
//! - Decode the record id from the path where one is taken
//! - Decode the request body into a user record for create and update
//! - Perform exactly one store operation and map its outcome to a response
//!
//! # Design Decisions
//! - Body decoding is lenient: a malformed or empty body becomes the
//!   zero-valued record and no 400 is produced. The source behaved this
//!   way and callers depend on it; stricter validation would be a
//!   behavioral change.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::http::path::decode_trailing_id;
use crate::http::response::{self, Payload};
use crate::http::server::AppState;
use crate::routing;
use crate::store::User;

/// `GET /` and any unmatched path.
pub async fn home() -> Response {
    (StatusCode::OK, "Welcome to the HomePage!").into_response()
}

/// `GET /user/get/{id}`.
pub async fn get_user(state: &AppState, path: &str) -> Response {
    let id = decode_trailing_id(routing::GET_PREFIX, path);
    match state.store.find_by_id(id) {
        Ok(user) => response::reply(StatusCode::OK, &Payload::Record(user)),
        Err(err) => response::error(StatusCode::NOT_FOUND, Some(&err)),
    }
}

/// `POST /user/post/`.
pub async fn post_user(state: &AppState, body: &[u8]) -> Response {
    let user = decode_user(body);
    state.store.append(user);
    response::reply(StatusCode::CREATED, &Payload::Confirmation("Created"))
}

/// `DELETE /user/delete/{id}`.
pub async fn delete_user(state: &AppState, path: &str) -> Response {
    let id = decode_trailing_id(routing::DELETE_PREFIX, path);
    match state.store.remove_by_id(id) {
        Ok(()) => response::reply(StatusCode::OK, &Payload::Confirmation("Deleted")),
        Err(err) => response::error(StatusCode::NOT_FOUND, Some(&err)),
    }
}

/// `PATCH /user/patch/{id}`.
///
/// The whole stored record is replaced with the decoded body, including
/// the body's own id field.
pub async fn patch_user(state: &AppState, path: &str, body: &[u8]) -> Response {
    let id = decode_trailing_id(routing::PATCH_PREFIX, path);
    let user = decode_user(body);
    match state.store.replace_by_id(id, user) {
        Ok(()) => response::reply(StatusCode::OK, &Payload::Confirmation("Patched")),
        Err(err) => response::error(StatusCode::NOT_FOUND, Some(&err)),
    }
}

/// `GET /user/all/`.
pub async fn list_users(state: &AppState) -> Response {
    response::reply(StatusCode::OK, &Payload::Records(state.store.all()))
}

/// Decode a JSON body into a user record, falling back to the zero-valued
/// record on any decode failure.
fn decode_user(body: &[u8]) -> User {
    serde_json::from_slice(body).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_body_decodes() {
        let user = decode_user(br#"{"id":1,"username":"a","email":"a@x.com"}"#);
        assert_eq!(user.id, 1);
        assert_eq!(user.username, "a");
    }

    #[test]
    fn malformed_body_decodes_to_zero_record() {
        assert_eq!(decode_user(b"not json"), User::default());
        assert_eq!(decode_user(b""), User::default());
    }

    #[test]
    fn partial_body_zero_fills_missing_fields() {
        let user = decode_user(br#"{"username":"a"}"#);
        assert_eq!(user.id, 0);
        assert_eq!(user.email, "");
    }
}
