//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),
}

impl From<lobby_core::Error> for ApiError {
  fn from(e: lobby_core::Error) -> Self {
    use lobby_core::Error;
    match e {
      Error::EmployeeNotFound(_) | Error::VisitorNotFound(_) => {
        ApiError::NotFound(e.to_string())
      }
      Error::CompanyNotApproved(_) | Error::InvalidInput(_) => {
        ApiError::BadRequest(e.to_string())
      }
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}
