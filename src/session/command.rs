//! Reviewer actions as text commands, plus small display helpers
//!
//! One line of input is one action. Row ids are the flattened row
//! identities shown to the reviewer.

use super::types::{EntityLabel, RowId, UnknownLabel, NO_LABEL};
use std::path::PathBuf;
use thiserror::Error;

/// Errors parsing a command line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0} (try 'help')")]
    UnknownCommand(String),
    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
    #[error("not a row id: {0}")]
    InvalidRowId(String),
    #[error(transparent)]
    InvalidLabel(#[from] UnknownLabel),
}

/// One reviewer action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewCommand {
    /// Mark a row's tagged entity correct or incorrect
    Mark { id: RowId, correct: bool },
    /// Set the reviewer label; `None` is the literal "None"
    Label { id: RowId, label: Option<EntityLabel> },
    /// Replace a row's notes
    Note { id: RowId, text: String },
    /// Show one row, or every row
    Show(Option<RowId>),
    Table,
    Accuracy,
    /// Write the export; default file name when no path is given
    Export(Option<PathBuf>),
    Help,
    Quit,
}

impl ReviewCommand {
    /// Whether applying this command changes judgment state.
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            ReviewCommand::Mark { .. } | ReviewCommand::Label { .. } | ReviewCommand::Note { .. }
        )
    }

    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let (word, rest) = split_word(line.trim());
        let command = match word.to_ascii_lowercase().as_str() {
            "" => return Err(CommandError::Empty),
            "yes" | "y" => ReviewCommand::Mark {
                id: parse_id(rest, "yes")?,
                correct: true,
            },
            "no" | "n" => ReviewCommand::Mark {
                id: parse_id(rest, "no")?,
                correct: false,
            },
            "label" => {
                let (id_word, label_word) = split_word(rest);
                let id = parse_id(id_word, "label")?;
                let label_word = label_word.trim();
                if label_word.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "label",
                        argument: "a label",
                    });
                }
                let label = if label_word.eq_ignore_ascii_case(NO_LABEL) {
                    None
                } else {
                    Some(label_word.parse::<EntityLabel>()?)
                };
                ReviewCommand::Label { id, label }
            }
            "note" => {
                let (id_word, text) = split_word(rest);
                ReviewCommand::Note {
                    id: parse_id(id_word, "note")?,
                    text: text.trim().to_string(),
                }
            }
            "show" => {
                let rest = rest.trim();
                if rest.is_empty() {
                    ReviewCommand::Show(None)
                } else {
                    ReviewCommand::Show(Some(parse_id(rest, "show")?))
                }
            }
            "table" => ReviewCommand::Table,
            "accuracy" => ReviewCommand::Accuracy,
            "export" => {
                let rest = rest.trim();
                ReviewCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest)))
            }
            "help" | "?" => ReviewCommand::Help,
            "quit" | "exit" | "q" => ReviewCommand::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };
        Ok(command)
    }
}

/// Help text listing every command.
pub const COMMAND_HELP: &str = "\
commands:
  yes <id>              mark the tagged entity correct
  no <id>               mark the tagged entity incorrect
  label <id> <LABEL>    set your label (None, ORG, PERSON, ...)
  note <id> <text>      replace the notes (empty clears)
  show [id]             show one row or all rows
  table                 print the current export table
  accuracy              print the crude accuracy
  export [path]         write the CSV export
  help                  this text
  quit                  leave the session";

fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(pos) => (&s[..pos], &s[pos..]),
        None => (s, ""),
    }
}

fn parse_id(word: &str, command: &'static str) -> Result<RowId, CommandError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a row id",
        });
    }
    word.parse::<usize>()
        .map(RowId::new)
        .map_err(|_| CommandError::InvalidRowId(word.to_string()))
}

/// Choices offered when correcting a label: "None", then the closed set.
pub fn label_options() -> Vec<&'static str> {
    std::iter::once(NO_LABEL)
        .chain(EntityLabel::ALL.iter().map(|l| l.as_str()))
        .collect()
}

/// The option a label picker shows for `human_label`.
///
/// Labels outside the closed set show as "None".
pub fn selectable_label(human_label: &str) -> &'static str {
    human_label
        .parse::<EntityLabel>()
        .map(|l| l.as_str())
        .unwrap_or(NO_LABEL)
}

/// Mark the first occurrence of `entity` in `text` as `[[entity]]`.
pub fn highlight_entity(text: &str, entity: Option<&str>) -> String {
    match entity {
        Some(entity) if !entity.is_empty() && text.contains(entity) => {
            text.replacen(entity, &format!("[[{entity}]]"), 1)
        }
        _ => text.to_string(),
    }
}
