//! The employee directory and the approved-contractor allow-list.
//!
//! Both are fixed when the registry is constructed and never change for the
//! lifetime of the process, so they are shared without locking.

use serde::{Deserialize, Serialize};

/// A member of staff that visitors may come to meet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:    u64,
  /// Canonical display name. Lookups against it are case-insensitive.
  pub name:  String,
  pub email: String,
}

/// An employee entry before an identifier has been assigned.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewEmployee {
  pub name:  String,
  pub email: String,
}

impl NewEmployee {
  pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
    Self {
      name:  name.into(),
      email: email.into(),
    }
  }
}

/// Case-insensitive, locale-independent exact comparison.
pub fn names_match(a: &str, b: &str) -> bool {
  a == b || a.to_lowercase() == b.to_lowercase()
}

/// Static lookup tables held by a registry.
#[derive(Debug, Clone, Default)]
pub struct Directory {
  employees:          Vec<Employee>,
  approved_companies: Vec<String>,
}

impl Directory {
  /// Build a directory, numbering employees from 1 in the order given.
  pub fn new(
    employees: impl IntoIterator<Item = NewEmployee>,
    approved_companies: impl IntoIterator<Item = String>,
  ) -> Self {
    let employees = employees
      .into_iter()
      .zip(1..)
      .map(|(e, id)| Employee {
        id,
        name: e.name,
        email: e.email,
      })
      .collect();

    Self {
      employees,
      approved_companies: approved_companies.into_iter().collect(),
    }
  }

  /// The built-in seed used when no directory is configured.
  pub fn sample() -> Self {
    Self::new(
      [
        NewEmployee::new("Alice", "alice@example.com"),
        NewEmployee::new("Bob", "bob@example.com"),
        NewEmployee::new("Carol", "carol@example.com"),
      ],
      [
        "Acme Plumbing".to_owned(),
        "Bright Sparks Electrical".to_owned(),
        "Evergreen Landscaping".to_owned(),
      ],
    )
  }

  pub fn employees(&self) -> &[Employee] { &self.employees }

  pub fn approved_companies(&self) -> &[String] { &self.approved_companies }

  /// First employee, in directory order, whose name matches `name`.
  pub fn find_employee(&self, name: &str) -> Option<&Employee> {
    self.employees.iter().find(|e| names_match(&e.name, name))
  }

  pub fn is_approved_company(&self, company: &str) -> bool {
    self
      .approved_companies
      .iter()
      .any(|c| names_match(c, company))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn employee_ids_follow_directory_order() {
    let dir = Directory::sample();
    let ids: Vec<u64> = dir.employees().iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
  }

  #[test]
  fn employee_lookup_ignores_case() {
    let dir = Directory::sample();
    assert_eq!(dir.find_employee("aLiCe").map(|e| e.name.as_str()), Some("Alice"));
    assert!(dir.find_employee("Zed").is_none());
    assert!(dir.find_employee("Ali").is_none(), "no partial matches");
  }

  #[test]
  fn duplicate_names_resolve_to_first_entry() {
    let dir = Directory::new(
      [
        NewEmployee::new("Sam", "sam.one@example.com"),
        NewEmployee::new("SAM", "sam.two@example.com"),
      ],
      [],
    );
    let found = dir.find_employee("sam").unwrap();
    assert_eq!(found.id, 1);
    assert_eq!(found.email, "sam.one@example.com");
  }

  #[test]
  fn company_approval_ignores_case() {
    let dir = Directory::sample();
    assert!(dir.is_approved_company("ACME PLUMBING"));
    assert!(dir.is_approved_company("acme plumbing"));
    assert!(!dir.is_approved_company("Unknown Co"));
  }

  #[test]
  fn non_ascii_names_match_case_insensitively() {
    assert!(names_match("Ærøskøbing Ltd", "æRØSKØBING LTD"));
    assert!(!names_match("Ærøskøbing Ltd", "Aeroskobing Ltd"));
  }
}
