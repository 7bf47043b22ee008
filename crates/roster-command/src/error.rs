//! Error types for `roster-command`.
//!
//! Display output is the exact text shown to the user.

use thiserror::Error;

use crate::group::GroupCategory;

/// Usage and criteria rules for `group`, appended to its format errors.
pub const GROUP_USAGE: &str = "Usage: group by ROLE/CLASS/GRADE/FAVOURITE \
                               [specific criteria]Criteria rules:\n- ROLE: \
                               Student, Parent, Staff (case-insensitive)\n- \
                               CLASS: Any non-empty text (e.g. 2B, \
                               ScienceClub)\n- GRADE: pri 1~6/sec 1~5 (e.g. \
                               'pri 3' or 'sec 4')\n- FAVOURITE: No criteria \
                               needed";

/// A rejected command line. Nothing is partially applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
  #[error("Missing space after 'by'. {}", GROUP_USAGE)]
  MissingSeparator,

  #[error("Invalid format. {}", GROUP_USAGE)]
  InvalidFormat,

  #[error("Error: {0} requires a specified criteria.")]
  MissingCriteria(GroupCategory),

  #[error("Error: {0} doesn't requires a specified criteria.")]
  UnexpectedCriteria(GroupCategory),

  #[error("Unknown command")]
  UnknownCommand,

  #[error("Invalid command format! \n{0}")]
  InvalidCommandFormat(&'static str),

  #[error(
    "Multiple values specified for the following single-valued field(s): {}",
    .0.join(" ")
  )]
  DuplicatePrefixes(Vec<&'static str>),

  #[error(transparent)]
  Field(#[from] roster_core::Error),
}

#[derive(Debug, Error)]
pub enum Error {
  #[error(transparent)]
  Parse(#[from] ParseError),

  #[error(transparent)]
  Execute(#[from] roster_core::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
