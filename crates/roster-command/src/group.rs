//! Parser for the arguments of `group by <CATEGORY> [criteria]`.
//!
//! The input is consumed left to right by a three-state machine:
//!
//! ```text
//! Prefix ──"by"+ws──▶ Category ──token──▶ Criteria ──validate──▶ GroupCommand
//! ```
//!
//! Each state either advances on the unconsumed remainder or rejects the whole
//! line with a [`ParseError`]. There is no backtracking.

use roster_core::{book::GroupFilter, field::Grade, role::Role};
use strum::{AsRefStr, Display, EnumIter, IntoEnumIterator};

use crate::error::ParseError;

// ─── Category ────────────────────────────────────────────────────────────────

/// What a `group` command groups by. Displays upper-cased.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumIter)]
#[strum(serialize_all = "UPPERCASE")]
pub enum GroupCategory {
  Role,
  Class,
  Grade,
  Favourite,
}

impl GroupCategory {
  /// Case-insensitive match against the category names.
  fn from_token(token: &str) -> Option<Self> {
    Self::iter().find(|c| c.as_ref().eq_ignore_ascii_case(token))
  }

  pub fn takes_criteria(self) -> bool { !matches!(self, Self::Favourite) }
}

// ─── Parsed command ──────────────────────────────────────────────────────────

/// A validated `(category, criteria)` pair.
///
/// `criteria` is the user's text, trimmed but otherwise untouched; it is empty
/// exactly when the category takes none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupCommand {
  pub category: GroupCategory,
  pub criteria: String,
}

impl GroupCommand {
  /// The canonical argument string; parsing it yields `self` again.
  pub fn to_args(&self) -> String {
    if self.criteria.is_empty() {
      format!(" by {}", self.category)
    } else {
      format!(" by {} {}", self.category, self.criteria)
    }
  }

  /// Resolve the criteria into a filter over the address book.
  ///
  /// Role names are only checked here, so `group by ROLE teacher` parses but
  /// fails to run.
  pub fn filter(&self) -> roster_core::Result<GroupFilter> {
    Ok(match self.category {
      GroupCategory::Role => GroupFilter::Role(self.criteria.parse::<Role>()?),
      GroupCategory::Class => GroupFilter::Class(self.criteria.clone()),
      GroupCategory::Grade => GroupFilter::Grade(self.criteria.parse::<Grade>()?),
      GroupCategory::Favourite => GroupFilter::Favourite,
    })
  }
}

// ─── State machine ───────────────────────────────────────────────────────────

enum State<'a> {
  /// Expecting `by` followed by whitespace.
  Prefix(&'a str),
  /// Expecting a category token.
  Category(&'a str),
  /// Category known; the rest is criteria.
  Criteria(GroupCategory, &'a str),
}

/// Parse the text following the `group` command word.
pub fn parse_group_args(args: &str) -> Result<GroupCommand, ParseError> {
  let mut state = State::Prefix(args);
  loop {
    state = match state {
      State::Prefix(input) => State::Category(expect_by(input)?),
      State::Category(input) => {
        let (category, rest) = expect_category(input)?;
        State::Criteria(category, rest)
      }
      State::Criteria(category, rest) => {
        return validate(category, rest.trim());
      }
    };
  }
}

fn expect_by(input: &str) -> Result<&str, ParseError> {
  let rest = input
    .trim_start()
    .strip_prefix("by")
    .ok_or(ParseError::InvalidFormat)?;
  if rest.starts_with(char::is_whitespace) {
    Ok(rest)
  } else {
    Err(ParseError::MissingSeparator)
  }
}

fn expect_category(input: &str) -> Result<(GroupCategory, &str), ParseError> {
  let input = input.trim_start();
  let end = input.find(char::is_whitespace).unwrap_or(input.len());
  let (token, rest) = input.split_at(end);
  let category =
    GroupCategory::from_token(token).ok_or(ParseError::InvalidFormat)?;
  Ok((category, rest))
}

fn validate(
  category: GroupCategory,
  criteria: &str,
) -> Result<GroupCommand, ParseError> {
  match (category.takes_criteria(), criteria.is_empty()) {
    (false, false) => return Err(ParseError::UnexpectedCriteria(category)),
    (true, true) => return Err(ParseError::MissingCriteria(category)),
    _ => {}
  }
  if category == GroupCategory::Grade {
    criteria.parse::<Grade>()?;
  }
  Ok(GroupCommand {
    category,
    criteria: criteria.to_string(),
  })
}
