//! Read–eval–print state: the loaded book, its store, and line handling.

use anyhow::Context as _;
use roster_command::{CommandResult, run_line};
use roster_core::{book::AddressBook, store::AddressBookStore};

/// What the event loop should do after one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
  Continue,
  Exit,
}

/// Top-level application state.
pub struct App<S: AddressBookStore> {
  pub book: AddressBook,
  store:    S,
}

impl<S: AddressBookStore> App<S> {
  /// Load the book from `store`.
  pub fn open(store: S) -> anyhow::Result<Self> {
    let book = store.load().context("failed to load address book")?;
    tracing::info!(persons = book.len(), "address book ready");
    Ok(Self { book, store })
  }

  /// Run one input line and return the text to show plus what to do next.
  ///
  /// Rejected commands leave the book untouched; their message is returned
  /// for display and the loop continues.
  pub fn handle_line(&mut self, line: &str) -> (String, Flow) {
    match run_line(line, &mut self.book) {
      Ok(result) => {
        let mut out = render(&result);
        if result.mutated
          && let Err(e) = self.store.save(&self.book)
        {
          tracing::error!(error = %e, "save failed");
          out.push_str(&format!("\nCould not save data to file: {e}"));
        }
        let flow = if result.exit { Flow::Exit } else { Flow::Continue };
        (out, flow)
      }
      Err(e) => {
        tracing::debug!(%line, error = %e, "command rejected");
        (e.to_string(), Flow::Continue)
      }
    }
  }
}

fn render(result: &CommandResult) -> String {
  let mut out = result.feedback.clone();
  for line in &result.listed {
    out.push('\n');
    out.push_str(line);
  }
  out
}
