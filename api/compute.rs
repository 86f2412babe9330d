use numeric_utilities::config::EngineConfig;
use numeric_utilities::engine::Evaluator;
use numeric_utilities::http::{error_payload, json_response, method_not_allowed, parse_json_body};
use numeric_utilities::models::operation::Operation;
use numeric_utilities::telemetry;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

/// POST /api/compute — Evaluate a single numeric operation.
///
/// Body: `{"operation": "gcd", "a": 12, "b": 18}`.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return method_not_allowed("Use POST to submit an operation");
    }

    let operation: Operation = match parse_json_body(req.body()) {
        Ok(op) => op,
        Err(message) => {
            tracing::warn!(%message, "malformed compute request");
            return json_response(StatusCode::BAD_REQUEST, &error_payload("Bad request", message));
        }
    };

    let evaluator = Evaluator::new(EngineConfig::from_env()?);
    match evaluator.evaluate(&operation) {
        Ok(result) => json_response(StatusCode::OK, &result),
        Err(err) => json_response(
            StatusCode::BAD_REQUEST,
            &error_payload("Invalid argument", err.to_string()),
        ),
    }
}
