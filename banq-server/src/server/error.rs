use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use banq_accounts::account::error::AccountError;

/// Every handler outcome ends up as one of the table codes; nothing leaks
/// as a raw fault.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Account(#[from] AccountError),
    #[error("{0}")]
    InvalidBody(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Account(AccountError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Account(AccountError::InvalidAccountType(_)) => StatusCode::BAD_REQUEST,
            ApiError::Account(AccountError::Sqlx(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
