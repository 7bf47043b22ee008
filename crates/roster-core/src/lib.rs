//! Core types for the Roster contact book.
//!
//! Holds the validated field types, the [`Person`](person::Person) record and
//! the in-memory [`AddressBook`](book::AddressBook). Command parsing lives in
//! `roster-command`; persistence backends implement
//! [`AddressBookStore`](store::AddressBookStore).

pub mod book;
pub mod error;
pub mod field;
pub mod person;
pub mod role;
pub mod store;

pub use error::{Error, Result};
