use numeric_utilities::config::{EngineConfig, MAX_SAMPLE_SIZE};
use numeric_utilities::data::generate_sample_operations;
use numeric_utilities::engine::Evaluator;
use numeric_utilities::http::{
    error_payload, json_response, method_not_allowed, parse_json_body_or_default,
};
use numeric_utilities::models::report::ReportRequest;
use numeric_utilities::report::generate_report;
use numeric_utilities::telemetry;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

/// POST /api/report — Evaluate a sample dataset and verify the math properties.
///
/// Body (optional): `{"sample_size": 200}`. Without one, `NUMERIC_SAMPLE_SIZE` applies.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return method_not_allowed("Use POST to generate a verification report");
    }

    let request: ReportRequest = match parse_json_body_or_default(req.body()) {
        Ok(request) => request,
        Err(message) => {
            tracing::warn!(%message, "malformed report request");
            return json_response(StatusCode::BAD_REQUEST, &error_payload("Bad request", message));
        }
    };

    if let Some(requested) = request.sample_size {
        if requested == 0 || requested > MAX_SAMPLE_SIZE {
            return json_response(
                StatusCode::BAD_REQUEST,
                &error_payload(
                    "Bad request",
                    format!("sample_size must be between 1 and {MAX_SAMPLE_SIZE}"),
                ),
            );
        }
    }

    // configured size is already bounded by EngineConfig
    let config = EngineConfig::from_env()?;
    let sample_size = request.sample_size.unwrap_or(config.sample_size);

    let operations = generate_sample_operations(sample_size);
    let report = generate_report(&operations, &Evaluator::new(config));
    json_response(StatusCode::OK, &report)
}
