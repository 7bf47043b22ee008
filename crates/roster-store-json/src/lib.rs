//! JSON-file backend for the Roster address book.
//!
//! The whole book is read and written in one go; there is no incremental
//! update.

mod encode;
mod store;

pub mod error;

pub use error::{Error, Result};
pub use store::JsonStore;
