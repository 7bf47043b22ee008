//! Command-word dispatch and per-command argument parsing.

use std::{num::NonZeroUsize, str::FromStr};

use roster_core::{
  field::Tag,
  person::{AcademicRecord, ContactDetails, Person},
  role::Role,
};

use crate::{
  error::ParseError,
  group::{GroupCommand, parse_group_args},
  tokenizer::{ArgumentMultimap, Prefix, tokenize},
};

// ─── Prefixes ────────────────────────────────────────────────────────────────

const NAME: Prefix = "n/";
const PHONE: Prefix = "p/";
const EMAIL: Prefix = "e/";
const ADDRESS: Prefix = "a/";
const ROLE: Prefix = "r/";
const GRADE: Prefix = "g/";
const CLASS: Prefix = "c/";
const RELATIVE_NAME: Prefix = "rn/";
const RELATIVE_PHONE: Prefix = "rp/";
const TAG: Prefix = "t/";

const ADD_PREFIXES: [Prefix; 10] = [
  NAME,
  PHONE,
  EMAIL,
  ADDRESS,
  ROLE,
  GRADE,
  CLASS,
  RELATIVE_NAME,
  RELATIVE_PHONE,
  TAG,
];
const ADD_REQUIRED: [Prefix; 5] = [NAME, PHONE, EMAIL, ADDRESS, ROLE];
const ADD_SINGLE_VALUED: [Prefix; 9] = [
  NAME,
  PHONE,
  EMAIL,
  ADDRESS,
  ROLE,
  GRADE,
  CLASS,
  RELATIVE_NAME,
  RELATIVE_PHONE,
];

// ─── Usage ───────────────────────────────────────────────────────────────────

const ADD_USAGE: &str = "add: Adds a person to the address book. Parameters: \
                         n/NAME p/PHONE e/EMAIL a/ADDRESS r/ROLE [g/GRADE] \
                         [c/CLASS] [rn/RELATIVE_NAME] [rp/RELATIVE_PHONE] \
                         [t/TAG]...\nExample: add n/John Doe p/98765432 \
                         e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
                         r/Student g/pri 3 c/3A rn/Jane Doe rp/91234567 \
                         t/friends";
const DELETE_USAGE: &str = "delete: Deletes the person identified by the index \
                            number used in the displayed person list.\n\
                            Parameters: INDEX (must be a positive integer)\n\
                            Example: delete 1";
const FAVOURITE_USAGE: &str = "favourite: Toggles the favourite status of the \
                               person identified by the index number used in \
                               the displayed person list.\nParameters: INDEX \
                               (must be a positive integer)\nExample: \
                               favourite 1";
const FIND_USAGE: &str = "find: Finds all persons whose names contain any of \
                          the specified keywords (case-insensitive).\n\
                          Parameters: KEYWORD [MORE_KEYWORDS]...\nExample: \
                          find alice bob charlie";
const GROUP_HELP: &str = "group: Lists the persons in one group.\n\
                          Parameters: by ROLE/CLASS/GRADE/FAVOURITE \
                          [specific criteria]\nExample: group by GRADE pri 3";
const LIST_USAGE: &str = "list: Lists all persons in the address book.";
const HELP_USAGE: &str = "help: Shows program usage instructions.";
const EXIT_USAGE: &str = "exit: Exits the program.";

/// Usage text for every command, one paragraph each.
pub fn usage() -> String {
  [
    ADD_USAGE,
    DELETE_USAGE,
    FAVOURITE_USAGE,
    FIND_USAGE,
    GROUP_HELP,
    LIST_USAGE,
    HELP_USAGE,
    EXIT_USAGE,
  ]
  .join("\n\n")
}

// ─── Command ─────────────────────────────────────────────────────────────────

/// A one-based position in the person list, as typed by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Index(NonZeroUsize);

impl Index {
  pub fn from_one_based(n: usize) -> Option<Self> { NonZeroUsize::new(n).map(Self) }

  pub fn zero_based(self) -> usize { self.0.get() - 1 }
}

/// A fully parsed user command, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Add(Box<Person>),
  Delete(Index),
  Favourite(Index),
  Find(Vec<String>),
  Group(GroupCommand),
  List,
  Help,
  Exit,
}

/// Parse one input line. The command word is case-insensitive.
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
  let line = line.trim();
  let split = line.find(char::is_whitespace).unwrap_or(line.len());
  let (word, args) = line.split_at(split);

  match word.to_ascii_lowercase().as_str() {
    "" => Err(ParseError::InvalidCommandFormat(HELP_USAGE)),
    "add" => parse_add(args).map(|p| Command::Add(Box::new(p))),
    "delete" => parse_index(args, DELETE_USAGE).map(Command::Delete),
    "favourite" => parse_index(args, FAVOURITE_USAGE).map(Command::Favourite),
    "find" => parse_find(args),
    "group" => parse_group_args(args).map(Command::Group),
    "list" => Ok(Command::List),
    "help" => Ok(Command::Help),
    "exit" => Ok(Command::Exit),
    _ => Err(ParseError::UnknownCommand),
  }
}

// ─── Argument parsers ────────────────────────────────────────────────────────

fn parse_index(args: &str, usage: &'static str) -> Result<Index, ParseError> {
  args
    .trim()
    .parse::<usize>()
    .ok()
    .and_then(Index::from_one_based)
    .ok_or(ParseError::InvalidCommandFormat(usage))
}

fn parse_find(args: &str) -> Result<Command, ParseError> {
  let keywords: Vec<String> =
    args.split_whitespace().map(str::to_string).collect();
  if keywords.is_empty() {
    return Err(ParseError::InvalidCommandFormat(FIND_USAGE));
  }
  Ok(Command::Find(keywords))
}

fn parse_add(args: &str) -> Result<Person, ParseError> {
  let map = tokenize(args, &ADD_PREFIXES);
  let has_required = ADD_REQUIRED.iter().all(|&p| map.value(p).is_some());
  if !has_required || !map.preamble().is_empty() {
    return Err(ParseError::InvalidCommandFormat(ADD_USAGE));
  }
  map.verify_no_duplicates(&ADD_SINGLE_VALUED)?;

  let details = ContactDetails {
    name:    required(&map, NAME)?,
    phone:   required(&map, PHONE)?,
    email:   required(&map, EMAIL)?,
    address: required(&map, ADDRESS)?,
    tags:    map
      .all_values(TAG)
      .iter()
      .map(|t| t.parse::<Tag>())
      .collect::<Result<_, _>>()?,
  };
  let role: Role = required(&map, ROLE)?;
  let academic = AcademicRecord {
    grade:          optional(&map, GRADE)?,
    student_class:  optional(&map, CLASS)?,
    relative_name:  optional(&map, RELATIVE_NAME)?,
    relative_phone: optional(&map, RELATIVE_PHONE)?,
  };

  Ok(Person::from_role(details, role, academic, false)?)
}

fn required<T>(map: &ArgumentMultimap, prefix: Prefix) -> Result<T, ParseError>
where
  T: FromStr<Err = roster_core::Error>,
{
  let value = map.value(prefix).unwrap_or_default();
  Ok(value.parse()?)
}

fn optional<T>(
  map: &ArgumentMultimap,
  prefix: Prefix,
) -> Result<Option<T>, ParseError>
where
  T: FromStr<Err = roster_core::Error>,
{
  map.value(prefix).map(|v| v.parse()).transpose().map_err(Into::into)
}

#[cfg(test)]
mod tests {
  use super::*;

  const ALEX: &str = " n/Alex Yeoh p/87438807 e/alexyeoh@example.com a/Blk \
                      30 Geylang Street 29, #06-40";

  #[test]
  fn command_word_is_case_insensitive() {
    assert_eq!(parse_command("LIST").unwrap(), Command::List);
    assert_eq!(parse_command("  help  ").unwrap(), Command::Help);
    assert_eq!(parse_command("Exit now").unwrap(), Command::Exit);
  }

  #[test]
  fn unknown_and_empty_commands() {
    assert_eq!(parse_command("hello"), Err(ParseError::UnknownCommand));
    assert_eq!(
      parse_command("   ").unwrap_err().to_string(),
      format!("Invalid command format! \n{HELP_USAGE}")
    );
  }

  #[test]
  fn group_delegates_to_group_parser() {
    let cmd = parse_command("group by ROLE Student").unwrap();
    let Command::Group(group) = cmd else {
      panic!("expected Group")
    };
    assert_eq!(group.criteria, "Student");

    assert_eq!(parse_command("group byrole"), Err(ParseError::MissingSeparator));
    assert_eq!(parse_command("group by"), Err(ParseError::MissingSeparator));
    assert_eq!(parse_command("group"), Err(ParseError::InvalidFormat));
  }

  #[test]
  fn index_commands() {
    assert_eq!(
      parse_command("delete 2").unwrap(),
      Command::Delete(Index::from_one_based(2).unwrap())
    );
    assert_eq!(
      parse_command("favourite 1").unwrap(),
      Command::Favourite(Index::from_one_based(1).unwrap())
    );
    for bad in ["delete", "delete 0", "delete -1", "delete one"] {
      assert_eq!(
        parse_command(bad),
        Err(ParseError::InvalidCommandFormat(DELETE_USAGE)),
        "{bad}"
      );
    }
  }

  #[test]
  fn find_requires_keywords() {
    assert_eq!(
      parse_command("find alex  david").unwrap(),
      Command::Find(vec!["alex".into(), "david".into()])
    );
    assert_eq!(
      parse_command("find   "),
      Err(ParseError::InvalidCommandFormat(FIND_USAGE))
    );
  }

  #[test]
  fn add_student_with_all_fields() {
    let line = format!(
      "add{ALEX} r/student g/PRI 3 c/3A rn/Bernice Yu rp/99272758 t/friends \
       t/classmates"
    );
    let Command::Add(person) = parse_command(&line).unwrap() else {
      panic!("expected Add")
    };
    assert_eq!(person.role(), Role::Student);
    assert_eq!(person.grade().unwrap().as_ref(), "pri 3");
    assert_eq!(person.student_class().unwrap().as_ref(), "3A");
    assert_eq!(person.relative_name().unwrap().as_ref(), "Bernice Yu");
    assert_eq!(person.tags().len(), 2);
    assert!(!person.is_favourite());
    assert_eq!(person.address().as_ref(), "Blk 30 Geylang Street 29, #06-40");
  }

  #[test]
  fn add_staff_without_academic_fields() {
    let Command::Add(person) =
      parse_command(&format!("add{ALEX} r/Staff")).unwrap()
    else {
      panic!("expected Add")
    };
    assert_eq!(person.role(), Role::Staff);
    assert!(person.grade().is_none());
  }

  #[test]
  fn add_rejects_academic_fields_on_staff() {
    assert_eq!(
      parse_command(&format!("add{ALEX} r/Staff g/pri 1")),
      Err(ParseError::Field(roster_core::Error::AcademicFieldsOnStaff))
    );
  }

  #[test]
  fn add_requires_prefixes_and_no_preamble() {
    let missing_role = parse_command(&format!("add{ALEX}"));
    assert_eq!(missing_role, Err(ParseError::InvalidCommandFormat(ADD_USAGE)));

    let preamble = parse_command(&format!("add junk{ALEX} r/Staff"));
    assert_eq!(preamble, Err(ParseError::InvalidCommandFormat(ADD_USAGE)));
  }

  #[test]
  fn add_rejects_duplicate_single_valued_prefixes() {
    let err =
      parse_command(&format!("add{ALEX} r/Staff p/91234567")).unwrap_err();
    assert_eq!(
      err.to_string(),
      "Multiple values specified for the following single-valued field(s): p/"
    );
  }

  #[test]
  fn add_reports_invalid_field_values() {
    let line = "add n/Alex p/12 e/alex@example.com a/Street r/Staff";
    assert!(matches!(
      parse_command(line),
      Err(ParseError::Field(roster_core::Error::InvalidPhone(_)))
    ));
    let line = "add n/Alex p/123 e/alex@example.com a/Street r/Teacher";
    assert!(matches!(
      parse_command(line),
      Err(ParseError::Field(roster_core::Error::InvalidRole(_)))
    ));
  }

  #[test]
  fn usage_lists_every_command() {
    let text = usage();
    for word in ["add:", "delete:", "favourite:", "find:", "group:", "list:"] {
      assert!(text.contains(word), "{word}");
    }
  }

  #[test]
  fn help_text_differs_from_group_error_usage() {
    let text = usage();
    assert!(text.contains(GROUP_HELP));
    assert!(!text.contains(crate::error::GROUP_USAGE));
    assert_ne!(GROUP_HELP, crate::error::GROUP_USAGE);
  }
}
