//! The on-disk shape of an address book.
//!
//! Stored as `{ "persons": [ ... ] }` so the file can grow other top-level
//! keys later without breaking old readers.

use roster_core::{book::AddressBook, person::Person};
use serde::{Deserialize, Serialize};

use crate::Result;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SerializedBook {
  #[serde(default)]
  pub persons: Vec<Person>,
}

impl From<&AddressBook> for SerializedBook {
  fn from(book: &AddressBook) -> Self {
    Self {
      persons: book.persons().to_vec(),
    }
  }
}

impl SerializedBook {
  /// Rebuild the book, rejecting files that list the same person twice.
  pub fn into_book(self) -> Result<AddressBook> {
    Ok(AddressBook::try_from(self.persons)?)
  }
}

pub fn encode_book(book: &AddressBook) -> Result<String> {
  Ok(serde_json::to_string_pretty(&SerializedBook::from(book))?)
}

pub fn decode_book(raw: &str) -> Result<AddressBook> {
  serde_json::from_str::<SerializedBook>(raw)?.into_book()
}
