//! Error types for `lobby-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no employee named {0:?}")]
  EmployeeNotFound(String),

  #[error("visitor {0} not found")]
  VisitorNotFound(u64),

  #[error("company {0:?} is not an approved contractor")]
  CompanyNotApproved(String),

  #[error("invalid input: {0}")]
  InvalidInput(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Reject names that are empty or whitespace-only.
pub fn require_name(field: &str, value: &str) -> Result<()> {
  if value.trim().is_empty() {
    return Err(Error::InvalidInput(format!("{field} must not be blank")));
  }
  Ok(())
}
