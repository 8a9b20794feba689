//! HTTP error taxonomy and envelope mapping.
//!
//! Every classified failure maps to one status code and the
//! `{"error": <string | {field: message}>}` envelope. Detail for server
//! errors stays in the logs; clients get a generic message.

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use tracing::error;

use crate::domain::ItemStoreError;
use crate::inbound::http::codec::{self, CodecError};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

/// Classified request failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Malformed, oversized, or otherwise undecodable client input.
    #[error("{0}")]
    BadRequest(String),
    /// Field-keyed validation failures; the envelope value is the map.
    #[error("validation failed")]
    Validation(BTreeMap<String, String>),
    /// The requested resource does not exist.
    #[error("record not found")]
    NotFound,
    /// The path exists but does not support the request method.
    #[error("the {0} method is not supported for this request")]
    MethodNotAllowed(String),
    /// A failure the client cannot repair; detail stays server-side.
    #[error("server could not process your request")]
    Internal,
}

impl From<CodecError> for ApiError {
    fn from(err: CodecError) -> Self {
        Self::BadRequest(err.to_string())
    }
}

/// Single dispatch point separating the not-found sentinel from storage
/// failures that must surface as server errors.
impl From<ItemStoreError> for ApiError {
    fn from(err: ItemStoreError) -> Self {
        match err {
            ItemStoreError::NotFound => Self::NotFound,
            other => {
                error!(error = %other, "storage operation failed");
                Self::Internal
            }
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            Self::Validation(errors) => json!(errors),
            other => json!(other.to_string()),
        };
        codec::json_response(self.status_code(), &json!({ "error": message }), &[])
    }
}
