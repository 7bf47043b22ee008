//! Validated field values carried by a [`Person`](crate::person::Person).
//!
//! Each type can only be built through [`FromStr`], so holding one is proof
//! that the text passed validation. Deserialisation goes through the same
//! check.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Shared plumbing for a string newtype validated by `$check`.
///
/// `$normalize` maps the accepted input to the stored form.
macro_rules! validated_text {
  ($ty:ident, $err:ident, $check:expr, $normalize:expr) => {
    impl FromStr for $ty {
      type Err = Error;

      fn from_str(s: &str) -> Result<Self> {
        let check: fn(&str) -> bool = $check;
        if !check(s) {
          return Err(Error::$err(s.to_string()));
        }
        let normalize: fn(&str) -> String = $normalize;
        Ok(Self(normalize(s)))
      }
    }

    impl TryFrom<String> for $ty {
      type Error = Error;

      fn try_from(value: String) -> Result<Self> { value.parse() }
    }

    impl From<$ty> for String {
      fn from(value: $ty) -> Self { value.0 }
    }

    impl AsRef<str> for $ty {
      fn as_ref(&self) -> &str { &self.0 }
    }
  };
}

/// Implements `Display` as the raw stored text.
macro_rules! display_raw {
  ($ty:ident) => {
    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

// ─── Identity ────────────────────────────────────────────────────────────────

/// A person's name: starts with an alphanumeric, then alphanumerics and
/// spaces.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

validated_text!(
  Name,
  InvalidName,
  |s| {
    let mut chars = s.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphanumeric())
      && chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
  },
  str::to_string
);
display_raw!(Name);

impl Name {
  /// Whether `word` appears in this name as a whole word, ignoring case.
  pub fn contains_word(&self, word: &str) -> bool {
    self
      .0
      .split_whitespace()
      .any(|part| part.eq_ignore_ascii_case(word))
  }
}

/// A phone number of at least three digits.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

validated_text!(
  Phone,
  InvalidPhone,
  |s| s.len() >= 3 && s.bytes().all(|b| b.is_ascii_digit()),
  str::to_string
);
display_raw!(Phone);

/// An email address of the form `local-part@domain`.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

validated_text!(
  Email,
  InvalidEmail,
  |s| {
    // Local part: alphanumeric runs joined by single `+_.-`. Domain: labels
    // that neither start nor end with `-`, the last at least two long.
    static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
      Regex::new(concat!(
        r"(?i-u)^[a-z0-9]+(?:[+_.-][a-z0-9]+)*",
        r"@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)*[a-z0-9][a-z0-9-]*[a-z0-9]$",
      ))
      .expect("email pattern is valid")
    });
    PATTERN.is_match(s)
  },
  str::to_string
);
display_raw!(Email);

// ─── Data ────────────────────────────────────────────────────────────────────

/// A postal address; any non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

validated_text!(
  Address,
  InvalidAddress,
  |s| !s.trim().is_empty(),
  str::to_string
);
display_raw!(Address);

/// A single alphanumeric tag. Displays as `[name]`.
#[derive(
  Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

validated_text!(
  Tag,
  InvalidTag,
  |s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()),
  str::to_string
);

impl fmt::Display for Tag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "[{}]", self.0)
  }
}

// ─── Academic ────────────────────────────────────────────────────────────────

/// A school level: `pri 1`–`pri 6` or `sec 1`–`sec 5`.
///
/// Parsing is case-insensitive; the stored form is lower-case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Grade(String);

validated_text!(
  Grade,
  InvalidGrade,
  |s| {
    static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
      Regex::new(r"(?i-u)^(?:pri [1-6]|sec [1-5])$")
        .expect("grade pattern is valid")
    });
    PATTERN.is_match(s)
  },
  str::to_ascii_lowercase
);
display_raw!(Grade);

/// A class or club name; any non-blank text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StudentClass(String);

validated_text!(
  StudentClass,
  InvalidClass,
  |s| !s.trim().is_empty(),
  str::to_string
);
display_raw!(StudentClass);

impl StudentClass {
  pub fn eq_ignore_case(&self, other: &str) -> bool {
    self.0.eq_ignore_ascii_case(other.trim())
  }
}
