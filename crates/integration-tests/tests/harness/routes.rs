//! Demo loan routes exercising the failure contract end to end
//!
//! A stand-in for the platform's real business routers: handlers raise
//! `PlatformError` values and hand them to the shared dispatcher, exactly
//! the way feature crates do in production.

use std::sync::Arc;

use axum::extract::{Path, RawQuery};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json, Router, routing};
use ledgerline_core::PlatformError;
use ledgerline_server::ErrorDispatcher;

/// Query parameters the loan operations recognize
const SUPPORTED_QUERY_PARAMETERS: [&str; 1] = ["command"];

/// Build the demo loan router
pub fn loan_router() -> Router {
    Router::new()
        .route(
            "/loans/{id}",
            routing::get(get_loan).put(update_loan).delete(delete_loan),
        )
        .route("/loans/disburse", routing::post(disburse))
        .route("/loans/report", routing::get(report))
}

/// Handle `GET /loans/{id}`
async fn get_loan(
    Extension(dispatcher): Extension<Arc<ErrorDispatcher>>,
    Path(id): Path<String>,
) -> Response {
    if id == "1" {
        return Json(serde_json::json!({ "id": 1, "principal": 5000 })).into_response();
    }
    dispatcher.respond(&PlatformError::NotFound {
        resource: "Loan".to_owned(),
        identifier: Some(id),
    })
}

/// Handle `PUT /loans/{id}`
///
/// Loan 42 is permanently contended so tests can observe the conflict path.
async fn update_loan(
    Extension(dispatcher): Extension<Arc<ErrorDispatcher>>,
    Path(id): Path<String>,
    RawQuery(query): RawQuery,
    body: String,
) -> Response {
    if let Err(error) = check_query_parameters(query.as_deref()) {
        return dispatcher.respond(&error);
    }

    if !body.is_empty() && serde_json::from_str::<serde_json::Value>(&body).is_err() {
        return dispatcher.respond(&PlatformError::MalformedBody {
            detail: "The request body could not be parsed as JSON.".to_owned(),
        });
    }

    if id == "42" {
        return dispatcher.respond(&PlatformError::OptimisticLock {
            entity: "Loan".to_owned(),
            identifier: Some(id),
        });
    }

    Json(serde_json::json!({ "resourceId": id, "changes": {} })).into_response()
}

/// Handle `DELETE /loans/{id}`: the test caller never holds this permission
async fn delete_loan(
    Extension(dispatcher): Extension<Arc<ErrorDispatcher>>,
    Path(_id): Path<String>,
) -> Response {
    dispatcher.respond(&PlatformError::NotAuthorized {
        reason: "Insufficient privilege".to_owned(),
    })
}

/// Handle `POST /loans/disburse`: lock contention without entity detail
async fn disburse(Extension(dispatcher): Extension<Arc<ErrorDispatcher>>) -> Response {
    dispatcher.respond(&PlatformError::Concurrency)
}

/// Handle `GET /loans/report`: an unmapped internal failure
async fn report(Extension(dispatcher): Extension<Arc<ErrorDispatcher>>) -> Response {
    let error: PlatformError = anyhow::anyhow!("report generator: connection refused at 10.0.0.3:5432").into();
    dispatcher.respond(&error)
}

/// Reject query parameters outside the supported set, in received order
fn check_query_parameters(query: Option<&str>) -> Result<(), PlatformError> {
    let Some(query) = query else { return Ok(()) };

    let parameters: Vec<String> = query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split('=').next().unwrap_or(pair).to_owned())
        .filter(|name| !SUPPORTED_QUERY_PARAMETERS.contains(&name.as_str()))
        .collect();

    if parameters.is_empty() {
        Ok(())
    } else {
        Err(PlatformError::UnsupportedParameters { parameters })
    }
}
