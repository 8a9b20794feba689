//! Strict JSON request decoding and envelope response encoding.
//!
//! Decoding reads at most [`MAX_JSON_BYTES`] from the payload and accepts
//! exactly one JSON value; anything after the first value, including a
//! second whitespace-separated object, is rejected. Unknown fields are
//! rejected by the target DTOs via `#[serde(deny_unknown_fields)]`.
//!
//! Encoding serializes an envelope with a trailing newline and the JSON
//! content type. A failure inside encoding degrades to a bare 500 so the
//! error-reporting path can never recurse.

use actix_web::http::StatusCode;
use actix_web::http::header::{ContentType, HeaderName, HeaderValue};
use actix_web::{HttpResponse, web};
use futures_util::StreamExt;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::error;

/// Upper bound on accepted request-body size.
pub const MAX_JSON_BYTES: usize = 1_048_576;

/// Failures raised while decoding a request body. All of them are client
/// input errors; none map to a server error.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The payload exceeded [`MAX_JSON_BYTES`].
    #[error("body must not be larger than {MAX_JSON_BYTES} bytes")]
    TooLarge,
    /// The transport failed mid-read.
    #[error("failed to read request body")]
    Read,
    /// The body was not valid JSON for the target type.
    #[error("{0}")]
    Malformed(#[from] serde_json::Error),
    /// Content followed the first JSON value.
    #[error("body must only contain a single JSON object")]
    TrailingContent,
}

/// Read and strictly decode a single JSON object from the request payload.
///
/// # Errors
///
/// Returns a [`CodecError`] when the body is oversized, unreadable, not
/// valid JSON for `T`, or contains more than one JSON value.
pub async fn read_json<T: DeserializeOwned>(payload: &mut web::Payload) -> Result<T, CodecError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|_| CodecError::Read)?;
        if body.len() + chunk.len() > MAX_JSON_BYTES {
            return Err(CodecError::TooLarge);
        }
        body.extend_from_slice(&chunk);
    }
    decode(&body)
}

/// Decode exactly one JSON value from `body`, rejecting trailing content.
///
/// # Errors
///
/// Returns [`CodecError::Malformed`] when the bytes are not valid JSON for
/// `T` and [`CodecError::TrailingContent`] when a second value follows.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, CodecError> {
    let mut deserializer = serde_json::Deserializer::from_slice(body);
    let value = T::deserialize(&mut deserializer)?;
    deserializer
        .end()
        .map_err(|_| CodecError::TrailingContent)?;
    Ok(value)
}

/// Serialize `body` as a JSON response with a trailing newline.
///
/// Extra headers are applied before the content type. When serialization
/// itself fails, the error is logged and the response degrades to a bare
/// 500 with no body; this path never panics.
pub fn json_response(
    status: StatusCode,
    body: &impl Serialize,
    headers: &[(HeaderName, HeaderValue)],
) -> HttpResponse {
    let mut buf = match serde_json::to_vec(body) {
        Ok(buf) => buf,
        Err(err) => {
            error!(error = %err, "failed to encode response body");
            return HttpResponse::new(StatusCode::INTERNAL_SERVER_ERROR);
        }
    };
    buf.push(b'\n');

    let mut response = HttpResponse::build(status);
    for (name, value) in headers {
        response.insert_header((name.clone(), value.clone()));
    }
    response.content_type(ContentType::json()).body(buf)
}
