//! HTTP routes.

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::get,
    Json, Router,
};
use std::sync::Arc;

use notepost_domain::Record;
use notepost_shared::{CreateRecordRequest, DataResponse};

use crate::app::App;
use crate::use_cases::DataError;

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/health", get(health))
        .route("/data", get(list_data).post(create_data))
}

async fn health() -> &'static str {
    "OK"
}

async fn list_data(
    State(app): State<Arc<App>>,
) -> Result<Json<DataResponse<Vec<Record>>>, ApiError> {
    let records = app.use_cases.records.get_all_data().await?;
    Ok(Json(DataResponse::new(records)))
}

async fn create_data(
    State(app): State<Arc<App>>,
    body: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Record>>, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let record = app.use_cases.records.create_data(request.into()).await?;
    Ok(Json(DataResponse::new(record)))
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    Internal,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::BadRequest(msg) => {
                (axum::http::StatusCode::BAD_REQUEST, msg).into_response()
            }
            ApiError::Internal => (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                "Internal error",
            )
                .into_response(),
        }
    }
}

impl From<DataError> for ApiError {
    fn from(e: DataError) -> Self {
        tracing::error!(error = %e, "Record operation failed");
        ApiError::Internal
    }
}
