//! The role a contact plays in the school.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::{Error, Result};

/// Classification of a contact. Decides which academic fields exist.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  AsRefStr,
  Display,
  EnumIter,
)]
pub enum Role {
  Student,
  Parent,
  Staff,
}

impl Role {
  /// Whether records with this role may carry academic fields.
  pub fn has_academic_fields(self) -> bool { !matches!(self, Self::Staff) }
}

impl FromStr for Role {
  type Err = Error;

  /// Case-insensitive; surrounding whitespace is ignored.
  fn from_str(s: &str) -> Result<Self> {
    let wanted = s.trim();
    Role::iter()
      .find(|role| role.as_ref().eq_ignore_ascii_case(wanted))
      .ok_or_else(|| Error::InvalidRole(s.to_string()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_case_insensitively() {
    assert_eq!("student".parse::<Role>().unwrap(), Role::Student);
    assert_eq!("PARENT".parse::<Role>().unwrap(), Role::Parent);
    assert_eq!(" Staff ".parse::<Role>().unwrap(), Role::Staff);
  }

  #[test]
  fn rejects_unknown_role() {
    assert_eq!(
      "teacher".parse::<Role>(),
      Err(Error::InvalidRole("teacher".into()))
    );
  }

  #[test]
  fn only_staff_lacks_academic_fields() {
    assert!(Role::Student.has_academic_fields());
    assert!(Role::Parent.has_academic_fields());
    assert!(!Role::Staff.has_academic_fields());
  }

  #[test]
  fn displays_capitalised() {
    let names: Vec<String> = Role::iter().map(|r| r.to_string()).collect();
    assert_eq!(names, ["Student", "Parent", "Staff"]);
  }
}
