//! Handlers for `/visitors` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/visitors` | Every visitor, on site or departed |
//! | `GET`  | `/visitors/on-site` | Visitors that have not signed out |
//! | `POST` | `/visitors/arrive-meeting` | Body: [`ArriveMeetingBody`]; 404 if the employee is unknown |
//! | `POST` | `/visitors/arrive-courier` | Body: [`ArriveCourierBody`] |
//! | `POST` | `/visitors/arrive-contractor` | Body: [`ArriveContractorBody`]; 400 if the company is not approved |
//! | `POST` | `/visitors/sign-out` | Body: [`SignOutBody`]; 404 if the id was never issued |
//!
//! Successful writes answer `200` with a JSON string confirmation. Request
//! fields are camelCase; the PascalCase spelling is accepted as an alias.

use std::sync::Arc;

use axum::{Json, extract::State};
use lobby_core::{
  registry::VisitorRegistry,
  visitor::{SignOut, Visitor},
};
use serde::Deserialize;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /visitors`
pub async fn list<R>(
  State(registry): State<Arc<R>>,
) -> Result<Json<Vec<Visitor>>, ApiError>
where
  R: VisitorRegistry,
{
  Ok(Json(registry.list_visitors().await?))
}

/// `GET /visitors/on-site`
pub async fn on_site<R>(
  State(registry): State<Arc<R>>,
) -> Result<Json<Vec<Visitor>>, ApiError>
where
  R: VisitorRegistry,
{
  Ok(Json(registry.list_on_site_visitors().await?))
}

// ─── Arrivals ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArriveMeetingBody {
  #[serde(alias = "VisitorName")]
  pub visitor_name: String,
  /// Employee name, matched case-insensitively.
  #[serde(alias = "MeetingWith")]
  pub meeting_with: String,
}

/// `POST /visitors/arrive-meeting` — body: `{"visitorName":"..","meetingWith":".."}`
pub async fn arrive_meeting<R>(
  State(registry): State<Arc<R>>,
  Json(body): Json<ArriveMeetingBody>,
) -> Result<Json<String>, ApiError>
where
  R: VisitorRegistry,
{
  let visitor = registry
    .check_in_for_meeting(body.visitor_name, body.meeting_with)
    .await?;
  let employee = visitor.meeting_with.as_deref().unwrap_or_default();
  Ok(Json(format!(
    "{} has checked in to meet {employee} (visitor #{}).",
    visitor.name, visitor.id
  )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArriveCourierBody {
  #[serde(alias = "CourierName")]
  pub courier_name: String,
}

/// `POST /visitors/arrive-courier` — body: `{"courierName":".."}`
pub async fn arrive_courier<R>(
  State(registry): State<Arc<R>>,
  Json(body): Json<ArriveCourierBody>,
) -> Result<Json<String>, ApiError>
where
  R: VisitorRegistry,
{
  let visitor = registry.check_in_courier(body.courier_name).await?;
  Ok(Json(format!(
    "Courier {} has checked in (visitor #{}).",
    visitor.name, visitor.id
  )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArriveContractorBody {
  #[serde(alias = "VisitorName")]
  pub visitor_name: String,
  #[serde(alias = "Company")]
  pub company:      String,
}

/// `POST /visitors/arrive-contractor` — body: `{"visitorName":"..","company":".."}`
pub async fn arrive_contractor<R>(
  State(registry): State<Arc<R>>,
  Json(body): Json<ArriveContractorBody>,
) -> Result<Json<String>, ApiError>
where
  R: VisitorRegistry,
{
  let visitor = registry
    .check_in_contractor(body.visitor_name, body.company)
    .await?;
  let company = visitor.contractor_company.as_deref().unwrap_or_default();
  Ok(Json(format!(
    "Contractor {} from {company} has checked in (visitor #{}).",
    visitor.name, visitor.id
  )))
}

// ─── Sign-out ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignOutBody {
  #[serde(alias = "VisitorId")]
  pub visitor_id: u64,
}

/// `POST /visitors/sign-out` — body: `{"visitorId":1}`
///
/// Signing out twice is not an error; the second call reports that the
/// visitor had already left.
pub async fn sign_out<R>(
  State(registry): State<Arc<R>>,
  Json(body): Json<SignOutBody>,
) -> Result<Json<String>, ApiError>
where
  R: VisitorRegistry,
{
  let outcome = registry.sign_out(body.visitor_id).await?;
  let name = &outcome.visitor().name;
  let message = match &outcome {
    SignOut::SignedOut(_) => format!("{name} has signed out."),
    SignOut::AlreadySignedOut(v) => {
      tracing::debug!(visitor_id = v.id, "repeated sign-out");
      format!("{name} has already signed out.")
    }
  };
  Ok(Json(message))
}
