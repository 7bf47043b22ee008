//! Running a parsed [`Command`] against an [`AddressBook`].

use roster_core::{Error, Result, book::AddressBook, person::Person};

use crate::command::{Command, usage};

/// What the user sees after a command, plus hints for the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
  /// The one-line response.
  pub feedback: String,
  /// Numbered person lines to show under the feedback, if any.
  pub listed:   Vec<String>,
  /// The book changed and should be saved.
  pub mutated:  bool,
  /// The user asked to quit.
  pub exit:     bool,
}

impl CommandResult {
  fn message(feedback: impl Into<String>) -> Self {
    Self {
      feedback: feedback.into(),
      ..Self::default()
    }
  }

  fn mutation(feedback: impl Into<String>) -> Self {
    Self {
      mutated: true,
      ..Self::message(feedback)
    }
  }

  /// `matches` pairs each person with its zero-based position in the book.
  fn listing<'a>(matches: impl IntoIterator<Item = (usize, &'a Person)>) -> Self {
    let listed: Vec<String> = matches
      .into_iter()
      .map(|(i, p)| format!("{}. {p}", i + 1))
      .collect();
    let feedback = if listed.is_empty() {
      "No contacts found.".to_string()
    } else {
      format!("{} persons listed!", listed.len())
    };
    Self {
      listed,
      ..Self::message(feedback)
    }
  }
}

impl Command {
  /// Apply this command to `book`. On error the book is left untouched.
  pub fn execute(self, book: &mut AddressBook) -> Result<CommandResult> {
    match self {
      Command::Add(person) => {
        let shown = person.to_string();
        book.add(*person)?;
        Ok(CommandResult::mutation(format!("New person added: {shown}")))
      }
      Command::Delete(index) => {
        let removed = book.remove_at(index.zero_based())?;
        Ok(CommandResult::mutation(format!("Deleted Person: {removed}")))
      }
      Command::Favourite(index) => {
        let i = index.zero_based();
        let toggled = book
          .get(i)
          .ok_or(Error::IndexOutOfRange(i))?
          .toggle_favourite();
        let shown = toggled.to_string();
        book.replace_at(i, toggled)?;
        Ok(CommandResult::mutation(format!(
          "Favourite status updated: {shown}"
        )))
      }
      Command::Find(keywords) => {
        Ok(CommandResult::listing(book.find_by_name_keywords(keywords.as_slice())))
      }
      Command::Group(group) => {
        let filter = group.filter()?;
        Ok(CommandResult::listing(book.group(&filter)))
      }
      Command::List => Ok(CommandResult {
        feedback: "Listed all persons".to_string(),
        ..CommandResult::listing(book.persons().iter().enumerate())
      }),
      Command::Help => Ok(CommandResult::message(usage())),
      Command::Exit => Ok(CommandResult {
        exit: true,
        ..CommandResult::message("Exiting Address Book as requested ...")
      }),
    }
  }
}

#[cfg(test)]
mod tests {
  use roster_core::person::NOT_APPLICABLE;

  use super::*;
  use crate::{Error as RunError, ParseError, run_line};

  fn run(book: &mut AddressBook, line: &str) -> CommandResult {
    run_line(line, book).unwrap()
  }

  fn populated() -> AddressBook {
    let mut book = AddressBook::new();
    for line in [
      "add n/Alex Yeoh p/87438807 e/alex@example.com a/Geylang r/Student \
       g/pri 3 c/3A rn/Bernice Yu rp/99272758",
      "add n/Bernice Yu p/99272758 e/bernice@example.com a/Serangoon \
       r/Parent rn/Alex Yeoh",
      "add n/David Li p/91031282 e/david@example.com a/Tampines r/Staff \
       t/maths",
    ] {
      run(&mut book, line);
    }
    book
  }

  #[test]
  fn add_reports_and_marks_mutation() {
    let mut book = AddressBook::new();
    let result = run(
      &mut book,
      "add n/David Li p/91031282 e/david@example.com a/Tampines r/Staff",
    );
    assert!(result.mutated);
    assert_eq!(
      result.feedback,
      "New person added: David Li; Phone: 91031282; Email: \
       david@example.com; Address: Tampines; Role: Staff; Tags: "
    );
    assert_eq!(book.len(), 1);
  }

  #[test]
  fn add_duplicate_is_rejected() {
    let mut book = populated();
    let err = run_line(
      "add n/David Li p/91031282 e/other@example.com a/Bedok r/Staff",
      &mut book,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "This person already exists in the address book");
    assert_eq!(book.len(), 3);
  }

  #[test]
  fn favourite_toggles_in_place() {
    let mut book = populated();
    let result = run(&mut book, "favourite 2");
    assert!(result.mutated);
    assert!(result.feedback.starts_with("Favourite status updated: Bernice Yu"));
    assert!(result.feedback.contains(&format!("Child's Grade: {NOT_APPLICABLE}")));
    assert!(book.get(1).unwrap().is_favourite());

    run(&mut book, "favourite 2");
    assert!(!book.get(1).unwrap().is_favourite());
  }

  #[test]
  fn out_of_range_index_is_invalid() {
    let mut book = populated();
    for line in ["favourite 4", "delete 9"] {
      let err = run_line(line, &mut book).unwrap_err();
      assert_eq!(err.to_string(), "The person index provided is invalid");
    }
    assert_eq!(book.len(), 3);
  }

  #[test]
  fn delete_removes_person() {
    let mut book = populated();
    let result = run(&mut book, "delete 1");
    assert!(result.feedback.starts_with("Deleted Person: Alex Yeoh;"));
    assert_eq!(book.len(), 2);
  }

  #[test]
  fn group_lists_matching_persons_with_book_positions() {
    let mut book = populated();
    let result = run(&mut book, "group by ROLE staff");
    assert!(!result.mutated);
    assert_eq!(result.feedback, "1 persons listed!");
    assert_eq!(result.listed.len(), 1);
    assert!(result.listed[0].starts_with("3. David Li;"));

    let result = run(&mut book, "group by GRADE PRI 3");
    assert_eq!(result.listed.len(), 1);
    assert!(result.listed[0].starts_with("1. Alex Yeoh;"));

    let result = run(&mut book, "group by CLASS 3a");
    assert_eq!(result.listed.len(), 1);
  }

  #[test]
  fn group_with_no_matches() {
    let mut book = populated();
    let result = run(&mut book, "group by FAVOURITE");
    assert_eq!(result.feedback, "No contacts found.");
    assert!(result.listed.is_empty());
  }

  #[test]
  fn group_with_unknown_role_fails_on_execution() {
    let mut book = populated();
    let err = run_line("group by ROLE teacher", &mut book).unwrap_err();
    assert!(matches!(err, RunError::Execute(Error::InvalidRole(_))));
  }

  #[test]
  fn group_parse_errors_surface_verbatim() {
    let mut book = populated();
    let err = run_line("group by CLASS", &mut book).unwrap_err();
    assert!(matches!(err, RunError::Parse(ParseError::MissingCriteria(_))));
    assert_eq!(err.to_string(), "Error: CLASS requires a specified criteria.");
  }

  #[test]
  fn find_and_list() {
    let mut book = populated();
    let found = run(&mut book, "find yu li");
    assert_eq!(found.feedback, "2 persons listed!");

    let all = run(&mut book, "list");
    assert_eq!(all.feedback, "Listed all persons");
    assert_eq!(all.listed.len(), 3);
  }

  #[test]
  fn exit_sets_flag() {
    let mut book = AddressBook::new();
    let result = run(&mut book, "exit");
    assert!(result.exit);
    assert!(!result.mutated);
  }
}
