//! Response envelope: an explicit status code paired with a JSON payload.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Every successful handler returns one of these, so the status never
/// depends on a default. The payload is rendered as the body as-is.
#[derive(Debug)]
pub struct Envelope<T> {
    pub status: StatusCode,
    pub body: T,
}

impl<T> Envelope<T> {
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
