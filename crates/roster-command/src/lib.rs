//! Text command surface for the Roster contact book.
//!
//! Pipeline:
//!   raw line
//!     └─ parse_command()          → Command
//!          ├─ tokenize()          → ArgumentMultimap   (add)
//!          └─ parse_group_args()  → GroupCommand       (group)
//!     └─ Command::execute()       → CommandResult
//!
//! # Quick start
//!
//! ```no_run
//! use roster_core::book::AddressBook;
//!
//! let mut book = AddressBook::new();
//! let result = roster_command::run_line("group by ROLE Student", &mut book)
//!   .unwrap();
//! println!("{}", result.feedback);
//! ```

mod command;
pub mod error;
mod execute;
pub mod group;
mod tokenizer;

pub use command::{Command, Index, parse_command, usage};
pub use error::{Error, ParseError, Result};
pub use execute::CommandResult;
pub use group::{GroupCategory, GroupCommand, parse_group_args};
use roster_core::book::AddressBook;

/// Parse `line` and run it against `book`.
pub fn run_line(line: &str, book: &mut AddressBook) -> Result<CommandResult> {
  let command = parse_command(line)?;
  tracing::debug!(?command, "parsed command");
  Ok(command.execute(book)?)
}
