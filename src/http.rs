//! Shared helpers for the serverless handlers in `api/`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};
use vercel_runtime::{Body, Error, Response, StatusCode};

/// Build a JSON response with the given status.
pub fn json_response(
    status: StatusCode,
    payload: &impl Serialize,
) -> Result<Response<Body>, Error> {
    let text = serde_json::to_string(payload)?;
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(text))?)
}

/// `{"error": ..., "message": ...}` payload used by every failure response.
pub fn error_payload(error: &str, message: impl Into<String>) -> Value {
    json!({
        "error": error,
        "message": message.into(),
    })
}

/// 405 response naming the method the endpoint expects.
pub fn method_not_allowed(message: &str) -> Result<Response<Body>, Error> {
    json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &error_payload("Method not allowed", message),
    )
}

/// Raw bytes of a request body.
pub fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes,
    }
}

/// Parse a JSON request body. An empty body is an error.
pub fn parse_json_body<T: DeserializeOwned>(body: &Body) -> Result<T, String> {
    let bytes = body_bytes(body);
    if is_blank(bytes) {
        return Err("request body is empty".to_string());
    }
    serde_json::from_slice(bytes).map_err(|e| e.to_string())
}

/// Like [`parse_json_body`], but an empty body parses as `T::default()`.
pub fn parse_json_body_or_default<T>(body: &Body) -> Result<T, String>
where
    T: DeserializeOwned + Default,
{
    if is_blank(body_bytes(body)) {
        return Ok(T::default());
    }
    parse_json_body(body)
}

fn is_blank(bytes: &[u8]) -> bool {
    bytes.iter().all(u8::is_ascii_whitespace)
}
