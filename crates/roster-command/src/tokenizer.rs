//! Splits `prefix/value` argument strings, e.g. ` n/Alex p/9876 t/a t/b`.
//!
//! A prefix only counts when it follows whitespace, so `rp/` is never
//! mistaken for `p/`.

use std::collections::HashMap;

use crate::error::ParseError;

/// An argument marker such as `n/`.
pub(crate) type Prefix = &'static str;

/// Values keyed by prefix, in the order they appeared.
#[derive(Debug, Default)]
pub(crate) struct ArgumentMultimap {
  preamble: String,
  values:   HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
  /// Text before the first prefix, trimmed.
  pub fn preamble(&self) -> &str { &self.preamble }

  /// The last value given for `prefix`.
  pub fn value(&self, prefix: Prefix) -> Option<&str> {
    self
      .values
      .get(prefix)
      .and_then(|v| v.last())
      .map(String::as_str)
  }

  pub fn all_values(&self, prefix: Prefix) -> &[String] {
    self.values.get(prefix).map(Vec::as_slice).unwrap_or_default()
  }

  /// Fail if any of `prefixes` was given more than once.
  pub fn verify_no_duplicates(
    &self,
    prefixes: &[Prefix],
  ) -> Result<(), ParseError> {
    let duplicated: Vec<Prefix> = prefixes
      .iter()
      .copied()
      .filter(|p| self.values.get(p).is_some_and(|v| v.len() > 1))
      .collect();
    if duplicated.is_empty() {
      Ok(())
    } else {
      Err(ParseError::DuplicatePrefixes(duplicated))
    }
  }
}

/// Split `args` on every whitespace-preceded occurrence of `prefixes`.
pub(crate) fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
  let mut positions: Vec<(usize, Prefix)> = prefixes
    .iter()
    .flat_map(|&prefix| {
      args.match_indices(prefix).filter_map(move |(start, _)| {
        args[..start]
          .ends_with(char::is_whitespace)
          .then_some((start, prefix))
      })
    })
    .collect();
  positions.sort_by_key(|&(start, _)| start);

  let mut map = ArgumentMultimap {
    preamble: args[..positions.first().map_or(args.len(), |p| p.0)]
      .trim()
      .to_string(),
    values:   HashMap::new(),
  };

  for (i, &(start, prefix)) in positions.iter().enumerate() {
    let end = positions.get(i + 1).map_or(args.len(), |next| next.0);
    let value = args[start + prefix.len()..end].trim().to_string();
    map.values.entry(prefix).or_default().push(value);
  }
  map
}
