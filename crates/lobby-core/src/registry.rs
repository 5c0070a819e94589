//! The `VisitorRegistry` trait.
//!
//! Implemented by registry backends (e.g. `lobby-store-memory`). The HTTP
//! layer depends on this abstraction, not on a concrete backend.

use std::future::Future;

use crate::{
  Result,
  directory::Employee,
  visitor::{SignOut, Visitor},
};

/// Owner of the employee directory, the approved-contractor list and the
/// visitor roster.
///
/// Every method is a single atomic step: implementations must serialise the
/// read-modify-write of the roster and the visitor id counter so that ids are
/// unique and strictly increasing in assignment order.
pub trait VisitorRegistry: Send + Sync {
  // ── Reads ─────────────────────────────────────────────────────────────

  /// The employee directory, in insertion order.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>>> + Send + '_;

  /// Every visitor ever checked in, on site or departed, in roster order.
  fn list_visitors(
    &self,
  ) -> impl Future<Output = Result<Vec<Visitor>>> + Send + '_;

  /// Visitors that have not signed out, in roster order.
  fn list_on_site_visitors(
    &self,
  ) -> impl Future<Output = Result<Vec<Visitor>>> + Send + '_;

  // ── Check-in ──────────────────────────────────────────────────────────

  /// Check in `visitor_name` to meet the employee named `meeting_with`
  /// (matched case-insensitively). The stored record carries the employee's
  /// canonical name.
  ///
  /// Fails with [`Error::EmployeeNotFound`](crate::Error::EmployeeNotFound)
  /// if nobody in the directory has that name.
  fn check_in_for_meeting(
    &self,
    visitor_name: String,
    meeting_with: String,
  ) -> impl Future<Output = Result<Visitor>> + Send + '_;

  /// Check in a courier. Only the name is validated.
  fn check_in_courier(
    &self,
    courier_name: String,
  ) -> impl Future<Output = Result<Visitor>> + Send + '_;

  /// Check in a contractor working for `company`.
  ///
  /// Fails with
  /// [`Error::CompanyNotApproved`](crate::Error::CompanyNotApproved) if the
  /// company is not on the allow-list; nothing is stored in that case.
  fn check_in_contractor(
    &self,
    visitor_name: String,
    company: String,
  ) -> impl Future<Output = Result<Visitor>> + Send + '_;

  // ── Sign-out ──────────────────────────────────────────────────────────

  /// Record the departure of `visitor_id`. Repeating it is a no-op reported
  /// as [`SignOut::AlreadySignedOut`].
  ///
  /// Fails with [`Error::VisitorNotFound`](crate::Error::VisitorNotFound) if
  /// the id was never issued.
  fn sign_out(
    &self,
    visitor_id: u64,
  ) -> impl Future<Output = Result<SignOut>> + Send + '_;
}
