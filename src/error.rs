use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Serialize)]
pub struct ErrorResponseBody {
    pub error: String,
}

/// Generic failure reported for a dashboard query. The driver error is
/// logged when the value is built and never handed to the caller.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DataError {
    #[error("Failed to fetch revenue data.")]
    Revenue,
    #[error("Failed to fetch the latest invoices.")]
    LatestInvoices,
    #[error("Failed to fetch card data.")]
    CardData,
    #[error("Failed to fetch invoices.")]
    Invoices,
    #[error("Failed to fetch total number of invoices.")]
    InvoicePages,
    #[error("Failed to fetch invoice.")]
    Invoice,
    #[error("Failed to fetch customers.")]
    Customers,
    #[error("Failed to fetch customer table.")]
    CustomerTable,
    #[error("Failed to fetch user.")]
    User,
}

impl DataError {
    /// Log `err` and collapse it into this variant.
    pub fn caused_by(self, err: &sqlx::Error) -> Self {
        tracing::error!(error = %err, "Database Error: {self}");
        self
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("not found")]
    NotFound,

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        AppError::BadRequest(msg.into())
    }
}

// Extractor rejections become JSON 400s like every other error body.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "invalid credentials".into()),
            AppError::NotFound => (StatusCode::NOT_FOUND, "not found".into()),
            AppError::Data(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()),
            AppError::Internal(err) => {
                tracing::error!(error = %format!("{err:#}"), "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".into(),
                )
            }
        };

        let body = Json(ErrorResponseBody { error: msg });
        (status, body).into_response()
    }
}
