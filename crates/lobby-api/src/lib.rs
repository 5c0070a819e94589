//! JSON REST API for the Lobby visitor registry.
//!
//! Exposes an axum [`Router`] backed by any
//! [`lobby_core::registry::VisitorRegistry`]. Transport concerns (binding,
//! request tracing) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(lobby_api::api_router(registry.clone()))
//! ```

pub mod employees;
pub mod error;
pub mod visitors;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use lobby_core::registry::VisitorRegistry;

pub use error::ApiError;

/// Build a fully-materialised API router for `registry`.
pub fn api_router<R>(registry: Arc<R>) -> Router<()>
where
  R: VisitorRegistry + 'static,
{
  Router::new()
    .route("/employees", get(employees::list::<R>))
    .route("/visitors", get(visitors::list::<R>))
    .route("/visitors/on-site", get(visitors::on_site::<R>))
    .route("/visitors/arrive-meeting", post(visitors::arrive_meeting::<R>))
    .route("/visitors/arrive-courier", post(visitors::arrive_courier::<R>))
    .route(
      "/visitors/arrive-contractor",
      post(visitors::arrive_contractor::<R>),
    )
    .route("/visitors/sign-out", post(visitors::sign_out::<R>))
    .with_state(registry)
}
