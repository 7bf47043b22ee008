//! The [`Person`] record and its role-dependent shape.
//!
//! A person is immutable once built. Changing the favourite flag produces a
//! new record via [`Person::toggle_favourite`].

use std::{collections::BTreeSet, fmt};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
  Error, Result,
  field::{Address, Email, Grade, Name, Phone, StudentClass, Tag},
  role::Role,
};

/// Rendered in place of an academic field that has no value.
pub const NOT_APPLICABLE: &str = "Not applicable";

// ─── Building blocks ─────────────────────────────────────────────────────────

/// Fields every contact carries regardless of role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
  pub name:    Name,
  pub phone:   Phone,
  pub email:   Email,
  pub address: Address,
  #[serde(default)]
  pub tags:    BTreeSet<Tag>,
}

/// School-related fields for students and parents.
///
/// For a parent these describe the linked child: `grade` is the child's
/// grade, `relative_name` the child's name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicRecord {
  pub grade:          Option<Grade>,
  pub student_class:  Option<StudentClass>,
  pub relative_name:  Option<Name>,
  pub relative_phone: Option<Phone>,
}

impl AcademicRecord {
  pub fn is_empty(&self) -> bool { self == &Self::default() }
}

/// The role together with whatever fields that role is allowed to carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "academic")]
pub enum PersonKind {
  Student(AcademicRecord),
  Parent(AcademicRecord),
  Staff,
}

impl PersonKind {
  pub fn role(&self) -> Role {
    match self {
      Self::Student(_) => Role::Student,
      Self::Parent(_) => Role::Parent,
      Self::Staff => Role::Staff,
    }
  }

  pub fn academic(&self) -> Option<&AcademicRecord> {
    match self {
      Self::Student(record) | Self::Parent(record) => Some(record),
      Self::Staff => None,
    }
  }
}

// ─── Person ──────────────────────────────────────────────────────────────────

/// A single contact in the address book.
///
/// Two notions of equality apply: [`Person::is_same_person`] compares only
/// name and phone, while `==` compares every field except `time_added`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
  details:    ContactDetails,
  kind:       PersonKind,
  favourite:  bool,
  time_added: DateTime<Utc>,
}

impl Person {
  fn build(details: ContactDetails, kind: PersonKind, favourite: bool) -> Self {
    Self {
      details,
      kind,
      favourite,
      time_added: Utc::now(),
    }
  }

  pub fn staff(details: ContactDetails, favourite: bool) -> Self {
    Self::build(details, PersonKind::Staff, favourite)
  }

  pub fn student(
    details: ContactDetails,
    academic: AcademicRecord,
    favourite: bool,
  ) -> Self {
    Self::build(details, PersonKind::Student(academic), favourite)
  }

  pub fn parent(
    details: ContactDetails,
    academic: AcademicRecord,
    favourite: bool,
  ) -> Self {
    Self::build(details, PersonKind::Parent(academic), favourite)
  }

  /// Build a person from a role chosen at runtime.
  ///
  /// Staff may not carry academic fields; a non-empty `academic` with
  /// [`Role::Staff`] is rejected.
  pub fn from_role(
    details: ContactDetails,
    role: Role,
    academic: AcademicRecord,
    favourite: bool,
  ) -> Result<Self> {
    if !role.has_academic_fields() && !academic.is_empty() {
      return Err(Error::AcademicFieldsOnStaff);
    }
    Ok(match role {
      Role::Student => Self::student(details, academic, favourite),
      Role::Parent => Self::parent(details, academic, favourite),
      Role::Staff => Self::staff(details, favourite),
    })
  }

  // ── Accessors ────────────────────────────────────────────────────────────

  pub fn name(&self) -> &Name { &self.details.name }

  pub fn phone(&self) -> &Phone { &self.details.phone }

  pub fn email(&self) -> &Email { &self.details.email }

  pub fn address(&self) -> &Address { &self.details.address }

  pub fn tags(&self) -> &BTreeSet<Tag> { &self.details.tags }

  pub fn kind(&self) -> &PersonKind { &self.kind }

  pub fn role(&self) -> Role { self.kind.role() }

  pub fn is_favourite(&self) -> bool { self.favourite }

  pub fn time_added(&self) -> DateTime<Utc> { self.time_added }

  /// Always `None` for staff.
  pub fn grade(&self) -> Option<&Grade> {
    self.kind.academic().and_then(|a| a.grade.as_ref())
  }

  /// Always `None` for staff.
  pub fn student_class(&self) -> Option<&StudentClass> {
    self.kind.academic().and_then(|a| a.student_class.as_ref())
  }

  /// The parent's name for a student, the child's name for a parent.
  pub fn relative_name(&self) -> Option<&Name> {
    self.kind.academic().and_then(|a| a.relative_name.as_ref())
  }

  /// The parent's phone for a student, the child's phone for a parent.
  pub fn relative_phone(&self) -> Option<&Phone> {
    self.kind.academic().and_then(|a| a.relative_phone.as_ref())
  }

  // ── Derived records ──────────────────────────────────────────────────────

  /// Returns a copy with the favourite flag inverted. Every other field,
  /// including absent academic fields and `time_added`, carries over.
  pub fn toggle_favourite(&self) -> Self {
    Self {
      favourite: !self.favourite,
      ..self.clone()
    }
  }

  /// Whether both records describe the same contact (same name and phone).
  pub fn is_same_person(&self, other: &Person) -> bool {
    self.details.name == other.details.name
      && self.details.phone == other.details.phone
  }
}

impl PartialEq for Person {
  fn eq(&self, other: &Self) -> bool {
    self.details == other.details
      && self.kind == other.kind
      && self.favourite == other.favourite
  }
}

impl Eq for Person {}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Writes `value`, or [`NOT_APPLICABLE`] when absent.
struct OrNotApplicable<'a, T>(Option<&'a T>);

impl<T: fmt::Display> fmt::Display for OrNotApplicable<'_, T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.0 {
      Some(value) => fmt::Display::fmt(value, f),
      None => f.write_str(NOT_APPLICABLE),
    }
  }
}

impl fmt::Display for Person {
  /// The one-line summary shown to the user after a command.
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "{}; Phone: {}; Email: {}; Address: {}; Role: {}",
      self.name(),
      self.phone(),
      self.email(),
      self.address(),
      self.role(),
    )?;

    let grade = OrNotApplicable(self.grade());
    let class = OrNotApplicable(self.student_class());
    let relative_name = OrNotApplicable(self.relative_name());
    let relative_phone = OrNotApplicable(self.relative_phone());

    match self.kind {
      PersonKind::Student(_) => write!(
        f,
        "; Grade: {grade}; Class: {class}; Parent's Name: {relative_name}; \
         Parent's Phone: {relative_phone}"
      )?,
      PersonKind::Parent(_) => write!(
        f,
        "; Child's Name: {relative_name}; Child's Phone: {relative_phone}; \
         Child's Grade: {grade}; Child's Class: {class}"
      )?,
      PersonKind::Staff => {}
    }

    f.write_str("; Tags: ")?;
    for tag in self.tags() {
      write!(f, "{tag}")?;
    }
    Ok(())
  }
}
