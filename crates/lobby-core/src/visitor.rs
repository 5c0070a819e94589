//! Visitor records.
//!
//! A visitor record is a value. Signing out does not edit a record; it
//! produces a new one for the same identifier which the registry stores in
//! place of the old.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Why a visitor is on the premises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitReason {
  Meeting,
  Courier,
  Contractor,
}

impl std::fmt::Display for VisitReason {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let s = match self {
      Self::Meeting => "meeting",
      Self::Courier => "courier",
      Self::Contractor => "contractor",
    };
    f.write_str(s)
  }
}

/// A single visit, from arrival to (optional) departure.
///
/// `meeting_with` is set only for [`VisitReason::Meeting`] and
/// `contractor_company` only for [`VisitReason::Contractor`]; the
/// constructors below are the only way the registry creates records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
  pub id:                 u64,
  pub name:               String,
  pub arrival_time:       DateTime<Utc>,
  pub is_on_site:         bool,
  pub reason:             VisitReason,
  pub meeting_with:       Option<String>,
  pub contractor_company: Option<String>,
  pub departure_time:     Option<DateTime<Utc>>,
}

impl Visitor {
  fn arriving(
    id: u64,
    name: String,
    reason: VisitReason,
    at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      arrival_time: at,
      is_on_site: true,
      reason,
      meeting_with: None,
      contractor_company: None,
      departure_time: None,
    }
  }

  /// A visitor arriving to meet the employee named `employee`.
  pub fn meeting(
    id: u64,
    name: String,
    employee: String,
    at: DateTime<Utc>,
  ) -> Self {
    Self {
      meeting_with: Some(employee),
      ..Self::arriving(id, name, VisitReason::Meeting, at)
    }
  }

  pub fn courier(id: u64, name: String, at: DateTime<Utc>) -> Self {
    Self::arriving(id, name, VisitReason::Courier, at)
  }

  /// A contractor from an already-approved `company`.
  pub fn contractor(
    id: u64,
    name: String,
    company: String,
    at: DateTime<Utc>,
  ) -> Self {
    Self {
      contractor_company: Some(company),
      ..Self::arriving(id, name, VisitReason::Contractor, at)
    }
  }

  /// The same visit after leaving at `at`.
  ///
  /// The departure time never precedes the arrival time, even if the clock
  /// stepped backwards in between.
  pub fn signed_out(&self, at: DateTime<Utc>) -> Self {
    Self {
      is_on_site: false,
      departure_time: Some(at.max(self.arrival_time)),
      ..self.clone()
    }
  }
}

/// Outcome of a sign-out request. Both variants are successes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOut {
  /// The visitor was on site and is now recorded as departed.
  SignedOut(Visitor),
  /// The visitor had already left; nothing changed.
  AlreadySignedOut(Visitor),
}

impl SignOut {
  pub fn visitor(&self) -> &Visitor {
    match self {
      Self::SignedOut(v) | Self::AlreadySignedOut(v) => v,
    }
  }
}

#[cfg(test)]
mod tests {
  use chrono::Duration;
  use serde_json::json;

  use super::*;

  #[test]
  fn optional_fields_follow_reason() {
    let now = Utc::now();
    let m = Visitor::meeting(1, "Dan".into(), "Alice".into(), now);
    assert_eq!(m.meeting_with.as_deref(), Some("Alice"));
    assert!(m.contractor_company.is_none());

    let c = Visitor::courier(2, "Eve".into(), now);
    assert!(c.meeting_with.is_none());
    assert!(c.contractor_company.is_none());

    let k = Visitor::contractor(3, "Fay".into(), "Acme Plumbing".into(), now);
    assert!(k.meeting_with.is_none());
    assert_eq!(k.contractor_company.as_deref(), Some("Acme Plumbing"));

    for v in [&m, &c, &k] {
      assert!(v.is_on_site);
      assert!(v.departure_time.is_none());
    }
  }

  #[test]
  fn signed_out_keeps_identity_and_never_departs_before_arrival() {
    let arrival = Utc::now();
    let v = Visitor::courier(7, "Gus".into(), arrival);

    let out = v.signed_out(arrival - Duration::seconds(5));
    assert_eq!(out.id, 7);
    assert_eq!(out.name, "Gus");
    assert_eq!(out.arrival_time, arrival);
    assert!(!out.is_on_site);
    assert_eq!(out.departure_time, Some(arrival));
    // The original value is untouched.
    assert!(v.is_on_site);
  }

  #[test]
  fn serializes_with_camel_case_fields_and_null_optionals() {
    let at = "2024-03-01T09:30:00Z".parse::<DateTime<Utc>>().unwrap();
    let v = Visitor::courier(4, "Hal".into(), at);
    let value = serde_json::to_value(&v).unwrap();
    assert_eq!(
      value,
      json!({
        "id": 4,
        "name": "Hal",
        "arrivalTime": "2024-03-01T09:30:00Z",
        "isOnSite": true,
        "reason": "Courier",
        "meetingWith": null,
        "contractorCompany": null,
        "departureTime": null,
      })
    );
  }
}
