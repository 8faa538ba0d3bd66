use poem::http::StatusCode;
use poem_openapi::Object;
use poem_openapi::payload::Json;
use serde::{Deserialize, Serialize};

/// Error response body shared by every endpoint.
///
/// `name` is a coarse error class ("ValidationError", "NotFound") and
/// `message` carries the machine-readable code from the domain
/// ("order.not_found").
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error to an HTTP status and response body.
///
/// Each resource module provides an implementation for its error enum in
/// its error_mapper.rs.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
