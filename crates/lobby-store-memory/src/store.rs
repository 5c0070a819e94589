//! [`MemoryRegistry`] — the in-memory implementation of [`VisitorRegistry`].

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use lobby_core::{
  Error, Result,
  directory::{Directory, Employee},
  error::require_name,
  registry::VisitorRegistry,
  visitor::{SignOut, Visitor},
};

// ─── Roster ──────────────────────────────────────────────────────────────────

/// Mutable registry state. Only ever touched while holding the lock.
#[derive(Debug)]
struct Roster {
  visitors: Vec<Visitor>,
  next_id:  u64,
}

impl Roster {
  fn new() -> Self {
    Self {
      visitors: Vec::new(),
      next_id:  1,
    }
  }

  /// Allocate an id, build the record with it and append it.
  fn admit(&mut self, build: impl FnOnce(u64) -> Visitor) -> Visitor {
    let visitor = build(self.next_id);
    self.next_id += 1;
    self.visitors.push(visitor.clone());
    visitor
  }
}

// ─── Registry ────────────────────────────────────────────────────────────────

/// A visitor registry held entirely in process memory.
///
/// Cloning is cheap and clones share state: the directory is behind an
/// `Arc`, the roster behind an `Arc<Mutex<_>>`.
#[derive(Clone)]
pub struct MemoryRegistry {
  directory: Arc<Directory>,
  roster:    Arc<Mutex<Roster>>,
}

impl MemoryRegistry {
  /// An empty roster over `directory`.
  pub fn new(directory: Directory) -> Self {
    Self {
      directory: Arc::new(directory),
      roster:    Arc::new(Mutex::new(Roster::new())),
    }
  }
}

impl Default for MemoryRegistry {
  fn default() -> Self { Self::new(Directory::sample()) }
}

impl VisitorRegistry for MemoryRegistry {
  // ── Reads ─────────────────────────────────────────────────────────────

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    let employees = self.directory.employees();
    debug!(count = employees.len(), "listing employees");
    Ok(employees.to_vec())
  }

  async fn list_visitors(&self) -> Result<Vec<Visitor>> {
    let roster = self.roster.lock().await;
    debug!(count = roster.visitors.len(), "listing visitors");
    Ok(roster.visitors.clone())
  }

  async fn list_on_site_visitors(&self) -> Result<Vec<Visitor>> {
    let roster = self.roster.lock().await;
    let on_site: Vec<Visitor> = roster
      .visitors
      .iter()
      .filter(|v| v.is_on_site)
      .cloned()
      .collect();
    debug!(count = on_site.len(), "listing on-site visitors");
    Ok(on_site)
  }

  // ── Check-in ──────────────────────────────────────────────────────────

  async fn check_in_for_meeting(
    &self,
    visitor_name: String,
    meeting_with: String,
  ) -> Result<Visitor> {
    require_name("visitor name", &visitor_name)?;
    require_name("employee name", &meeting_with)?;

    let employee = self
      .directory
      .find_employee(&meeting_with)
      .ok_or(Error::EmployeeNotFound(meeting_with))?;
    debug!(employee_id = employee.id, "matched employee for meeting");

    let mut roster = self.roster.lock().await;
    let visitor = roster.admit(|id| {
      Visitor::meeting(id, visitor_name, employee.name.clone(), Utc::now())
    });
    info!(
      visitor_id = visitor.id,
      employee_id = employee.id,
      "visitor checked in for meeting"
    );
    Ok(visitor)
  }

  async fn check_in_courier(&self, courier_name: String) -> Result<Visitor> {
    require_name("courier name", &courier_name)?;
    debug!("admitting courier");

    let mut roster = self.roster.lock().await;
    let visitor =
      roster.admit(|id| Visitor::courier(id, courier_name, Utc::now()));
    info!(visitor_id = visitor.id, "courier checked in");
    Ok(visitor)
  }

  async fn check_in_contractor(
    &self,
    visitor_name: String,
    company: String,
  ) -> Result<Visitor> {
    require_name("visitor name", &visitor_name)?;
    require_name("company", &company)?;

    if !self.directory.is_approved_company(&company) {
      debug!(%company, "rejected contractor from unapproved company");
      return Err(Error::CompanyNotApproved(company));
    }
    debug!(%company, "contractor company approved");

    let mut roster = self.roster.lock().await;
    let visitor = roster.admit(|id| {
      Visitor::contractor(id, visitor_name, company, Utc::now())
    });
    info!(
      visitor_id = visitor.id,
      company = visitor.contractor_company.as_deref(),
      "contractor checked in"
    );
    Ok(visitor)
  }

  // ── Sign-out ──────────────────────────────────────────────────────────

  async fn sign_out(&self, visitor_id: u64) -> Result<SignOut> {
    let mut roster = self.roster.lock().await;
    let slot = roster
      .visitors
      .iter_mut()
      .find(|v| v.id == visitor_id)
      .ok_or(Error::VisitorNotFound(visitor_id))?;
    debug!(visitor_id, on_site = slot.is_on_site, "sign-out requested");

    if !slot.is_on_site {
      debug!(visitor_id, "visitor already signed out");
      return Ok(SignOut::AlreadySignedOut(slot.clone()));
    }

    *slot = slot.signed_out(Utc::now());
    info!(visitor_id, reason = %slot.reason, "visitor signed out");
    Ok(SignOut::SignedOut(slot.clone()))
  }
}
