//! [`JsonStore`] — the JSON-file implementation of [`AddressBookStore`].

use std::{
  fs,
  io::ErrorKind,
  path::PathBuf,
};

use roster_core::{book::AddressBook, store::AddressBookStore};

use crate::{
  Error, Result,
  encode::{decode_book, encode_book},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// An address book kept in a single pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonStore {
  path: PathBuf,
}

impl JsonStore {
  pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

  fn io_error(&self, source: std::io::Error) -> Error {
    Error::Io {
      path: self.path.clone(),
      source,
    }
  }
}

impl AddressBookStore for JsonStore {
  type Error = Error;

  fn load(&self) -> Result<AddressBook> {
    let raw = match fs::read_to_string(&self.path) {
      Ok(raw) => raw,
      Err(e) if e.kind() == ErrorKind::NotFound => {
        tracing::info!(path = %self.path.display(), "no data file yet, starting empty");
        return Ok(AddressBook::new());
      }
      Err(e) => return Err(self.io_error(e)),
    };
    let book = decode_book(&raw)?;
    tracing::debug!(path = %self.path.display(), persons = book.len(), "loaded address book");
    Ok(book)
  }

  fn save(&self, book: &AddressBook) -> Result<()> {
    if let Some(parent) = self.path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
    }
    let raw = encode_book(book)?;
    fs::write(&self.path, raw).map_err(|e| self.io_error(e))?;
    tracing::debug!(path = %self.path.display(), persons = book.len(), "saved address book");
    Ok(())
  }
}
