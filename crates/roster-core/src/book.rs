//! The in-memory address book and its grouping filters.

use crate::{
  Error, Result,
  field::Grade,
  person::Person,
  role::Role,
};

// ─── Filters ─────────────────────────────────────────────────────────────────

/// A predicate selecting one group of contacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupFilter {
  Role(Role),
  /// Matches the class case-insensitively.
  Class(String),
  Grade(Grade),
  Favourite,
}

impl GroupFilter {
  pub fn matches(&self, person: &Person) -> bool {
    match self {
      Self::Role(role) => person.role() == *role,
      Self::Class(class) => person
        .student_class()
        .is_some_and(|c| c.eq_ignore_case(class)),
      Self::Grade(grade) => person.grade() == Some(grade),
      Self::Favourite => person.is_favourite(),
    }
  }
}

// ─── AddressBook ─────────────────────────────────────────────────────────────

/// An ordered list of contacts in which no two entries are the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
  persons: Vec<Person>,
}

impl AddressBook {
  pub fn new() -> Self { Self::default() }

  pub fn persons(&self) -> &[Person] { &self.persons }

  pub fn len(&self) -> usize { self.persons.len() }

  pub fn is_empty(&self) -> bool { self.persons.is_empty() }

  pub fn get(&self, index: usize) -> Option<&Person> { self.persons.get(index) }

  pub fn contains(&self, person: &Person) -> bool {
    self.persons.iter().any(|p| p.is_same_person(person))
  }

  /// Append `person`, rejecting anyone already present.
  pub fn add(&mut self, person: Person) -> Result<()> {
    if self.contains(&person) {
      return Err(Error::DuplicatePerson);
    }
    tracing::debug!(name = %person.name(), "adding person");
    self.persons.push(person);
    Ok(())
  }

  /// Remove and return the person at zero-based `index`.
  pub fn remove_at(&mut self, index: usize) -> Result<Person> {
    if index >= self.persons.len() {
      return Err(Error::IndexOutOfRange(index));
    }
    let removed = self.persons.remove(index);
    tracing::debug!(name = %removed.name(), "removed person");
    Ok(removed)
  }

  /// Replace the person at `index`. The replacement may keep the same
  /// identity but must not collide with any other entry.
  pub fn replace_at(&mut self, index: usize, person: Person) -> Result<Person> {
    if index >= self.persons.len() {
      return Err(Error::IndexOutOfRange(index));
    }
    let collides = self
      .persons
      .iter()
      .enumerate()
      .any(|(i, p)| i != index && p.is_same_person(&person));
    if collides {
      return Err(Error::DuplicatePerson);
    }
    Ok(std::mem::replace(&mut self.persons[index], person))
  }

  /// Persons whose name contains any of `keywords` as a whole word, paired
  /// with their zero-based position in the book.
  pub fn find_by_name_keywords<S: AsRef<str>>(
    &self,
    keywords: &[S],
  ) -> Vec<(usize, &Person)> {
    self.matching(|p| keywords.iter().any(|k| p.name().contains_word(k.as_ref())))
  }

  /// Persons selected by `filter`, paired with their position in the book.
  pub fn group(&self, filter: &GroupFilter) -> Vec<(usize, &Person)> {
    self.matching(|p| filter.matches(p))
  }

  fn matching(&self, keep: impl Fn(&Person) -> bool) -> Vec<(usize, &Person)> {
    self
      .persons
      .iter()
      .enumerate()
      .filter(|(_, p)| keep(p))
      .collect()
  }
}

impl TryFrom<Vec<Person>> for AddressBook {
  type Error = Error;

  /// Fails if the list contains the same person twice.
  fn try_from(persons: Vec<Person>) -> Result<Self> {
    let mut book = Self::new();
    for person in persons {
      book.add(person)?;
    }
    Ok(book)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::person::{AcademicRecord, ContactDetails};

  fn details(name: &str, phone: &str) -> ContactDetails {
    ContactDetails {
      name:    name.parse().unwrap(),
      phone:   phone.parse().unwrap(),
      email:   "someone@example.com".parse().unwrap(),
      address: "Blk 30 Geylang Street 29".parse().unwrap(),
      tags:    Default::default(),
    }
  }

  fn student(name: &str, phone: &str, grade: &str, class: &str) -> Person {
    Person::student(
      details(name, phone),
      AcademicRecord {
        grade: Some(grade.parse().unwrap()),
        student_class: Some(class.parse().unwrap()),
        ..Default::default()
      },
      false,
    )
  }

  fn sample() -> AddressBook {
    AddressBook::try_from(vec![
      student("Alex Yeoh", "87438807", "pri 3", "3A"),
      student("Bernice Yu", "99272758", "sec 2", "2B"),
      Person::parent(details("Charlotte Oliveiro", "93210283"), Default::default(), true),
      Person::staff(details("David Li", "91031282"), true),
    ])
    .unwrap()
  }

  #[test]
  fn add_rejects_same_identity() {
    let mut book = sample();
    let dup = Person::staff(details("Alex Yeoh", "87438807"), true);
    assert_eq!(book.add(dup), Err(Error::DuplicatePerson));
    assert_eq!(book.len(), 4);
  }

  #[test]
  fn try_from_rejects_duplicates() {
    let p = Person::staff(details("Alex Yeoh", "87438807"), false);
    let result = AddressBook::try_from(vec![p.clone(), p]);
    assert_eq!(result, Err(Error::DuplicatePerson));
  }

  #[test]
  fn remove_at_checks_bounds() {
    let mut book = sample();
    assert_eq!(book.remove_at(4), Err(Error::IndexOutOfRange(4)));
    let removed = book.remove_at(0).unwrap();
    assert_eq!(removed.name().as_ref(), "Alex Yeoh");
    assert_eq!(book.len(), 3);
  }

  #[test]
  fn replace_at_allows_same_identity_but_not_collisions() {
    let mut book = sample();
    let toggled = book.get(0).unwrap().toggle_favourite();
    book.replace_at(0, toggled).unwrap();
    assert!(book.get(0).unwrap().is_favourite());

    let clash = Person::staff(details("David Li", "91031282"), false);
    assert_eq!(book.replace_at(0, clash), Err(Error::DuplicatePerson));
  }

  #[test]
  fn find_matches_whole_words() {
    let book = sample();
    let found = book.find_by_name_keywords(&["alex", "li"]);
    let names: Vec<_> = found.iter().map(|(_, p)| p.name().as_ref()).collect();
    assert_eq!(names, ["Alex Yeoh", "David Li"]);
    assert_eq!(found[1].0, 3);
    assert!(book.find_by_name_keywords(&["Ale"]).is_empty());
  }

  #[test]
  fn group_by_each_filter() {
    let book = sample();
    assert_eq!(book.group(&GroupFilter::Role(Role::Student)).len(), 2);
    assert_eq!(book.group(&GroupFilter::Class("2b".into())).len(), 1);
    assert_eq!(
      book.group(&GroupFilter::Grade("PRI 3".parse().unwrap())).len(),
      1
    );
    assert_eq!(book.group(&GroupFilter::Favourite).len(), 2);
  }
}
