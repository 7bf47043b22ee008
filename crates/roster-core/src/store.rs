//! The `AddressBookStore` trait.
//!
//! Implemented by persistence backends (e.g. `roster-store-json`). The CLI
//! depends on this abstraction, not on a concrete backend.

use crate::book::AddressBook;

/// Loads and saves a whole [`AddressBook`] at once.
pub trait AddressBookStore {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the stored book. A store with nothing saved yet yields an empty
  /// book rather than an error.
  fn load(&self) -> Result<AddressBook, Self::Error>;

  /// Replace the stored book with `book`.
  fn save(&self, book: &AddressBook) -> Result<(), Self::Error>;
}
