//! Handler for `GET /employees`.

use std::sync::Arc;

use axum::{Json, extract::State};
use lobby_core::{directory::Employee, registry::VisitorRegistry};

use crate::error::ApiError;

/// `GET /employees`
pub async fn list<R>(
  State(registry): State<Arc<R>>,
) -> Result<Json<Vec<Employee>>, ApiError>
where
  R: VisitorRegistry,
{
  Ok(Json(registry.list_employees().await?))
}
