//! AWS Lambda handler for running equity projections
//!
//! This Lambda function accepts loan and resale configuration via JSON and
//! returns the rounded outcome table along with per-price break-even summaries.
//! With `?format=csv` the outcome table is returned as a CSV attachment instead.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};

use mortgage_outcomes::report::{to_csv, CSV_FILE_NAME};
use mortgage_outcomes::{run_request, OutcomeRequest, OutcomeResponse};

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response(body: &OutcomeResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

fn csv_response(bytes: Vec<u8>) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            format!("attachment; filename={}", CSV_FILE_NAME),
        )
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::from(bytes))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body = event.body();
    let body_str = match body {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: OutcomeRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let response = match run_request(&request) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &e.to_string()));
        }
    };

    // ?format=csv downloads the table instead of the JSON payload
    let wants_csv = event
        .query_string_parameters()
        .first("format")
        .map(|f| f.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if wants_csv {
        return match to_csv(&response.table) {
            Ok(bytes) => Ok(csv_response(bytes)),
            Err(e) => Ok(error_response(500, &format!("CSV encoding failed: {}", e))),
        };
    }

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
