//! Standard response envelope helpers.

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

#[derive(Serialize)]
pub struct SuccessOne<T> {
    pub data: T,
}

#[derive(Serialize)]
pub struct SuccessMany<T> {
    pub data: Vec<T>,
}

#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Serialize `body` with the JSON content type used by every endpoint.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (
            status,
            [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
            bytes,
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "response serialization failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE))],
                r#"{"error":"internal error"}"#,
            )
                .into_response()
        }
    }
}

pub fn success_one<T: Serialize>(data: T) -> Response {
    json_response(StatusCode::CREATED, &SuccessOne { data })
}

pub fn success_one_ok<T: Serialize>(data: T) -> Response {
    json_response(StatusCode::OK, &SuccessOne { data })
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> Response {
    json_response(StatusCode::OK, &SuccessMany { data })
}

pub fn message(message: &'static str) -> Response {
    json_response(StatusCode::OK, &MessageBody { message })
}
