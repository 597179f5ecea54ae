use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{Error, HttpResponse};
use serde::Serialize;
use std::marker::PhantomData;

/// Body of every error response. The field is spelled `mesage` on the wire,
/// existing clients read it under that name.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ErrorMessage {
    #[serde(rename = "mesage")]
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Builds the handlers' responses: the item itself on success, an
/// `ErrorMessage` with the matching status otherwise.
pub struct JsonResponse<T> {
    kind: PhantomData<T>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub fn build() -> Self {
        Self { kind: PhantomData }
    }

    pub fn ok(self, item: T) -> HttpResponse {
        HttpResponse::Ok().json(item)
    }

    pub fn bad_request(self, msg: impl Into<String>) -> Error {
        error(StatusCode::BAD_REQUEST, msg.into())
    }

    pub fn form_error(self, errors: String) -> Error {
        tracing::debug!("Invalid data received {}", errors);
        error(StatusCode::BAD_REQUEST, errors)
    }

    pub fn not_found(self, msg: impl Into<String>) -> Error {
        error(StatusCode::NOT_FOUND, msg.into())
    }

    pub fn conflict(self, msg: impl Into<String>) -> Error {
        error(StatusCode::CONFLICT, msg.into())
    }

    pub fn internal_server_error(self, msg: impl Into<String>) -> Error {
        error(StatusCode::INTERNAL_SERVER_ERROR, msg.into())
    }
}

pub(crate) fn error(status: StatusCode, message: String) -> Error {
    let response = HttpResponse::build(status).json(ErrorMessage::new(message.clone()));
    InternalError::from_response(message, response).into()
}
