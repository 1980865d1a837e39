//! Wire types for the variables backend.
//!
//! DESIGN
//! ======
//! Rows stay untyped: the backend decides the column set and the client only
//! renders and filters whatever it receives. `serde_json` is built with
//! `preserve_order`, so a row's key order is the order the backend sent.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde_json::{Map, Value};

/// One record of the displayed dataset, keyed by column name.
pub type Row = Map<String, Value>;

/// The full ordered collection of rows currently shown.
pub type Dataset = Vec<Row>;

/// Backend actions whose response replaces the dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Command {
    Read,
    Write,
    Update,
    Search,
}

impl Command {
    /// Every command in panel order.
    pub const ALL: [Command; 4] = [Command::Read, Command::Write, Command::Update, Command::Search];

    /// Endpoint path segment under `/api/`.
    pub fn name(self) -> &'static str {
        match self {
            Command::Read => "read",
            Command::Write => "write",
            Command::Update => "update",
            Command::Search => "search",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            Command::Read => "Read",
            Command::Write => "Write",
            Command::Update => "Update",
            Command::Search => "Search",
        }
    }

    /// Query parameter carrying the optional command argument.
    ///
    /// Search takes the variable key to look for; the others take a
    /// project-name keyword.
    pub fn argument_param(self) -> &'static str {
        match self {
            Command::Search => "key",
            Command::Read | Command::Write | Command::Update => "filter",
        }
    }
}

/// Render a cell value as display text. `null` shows as an empty cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

/// Text a cell is matched against by the row filter.
///
/// Same as [`cell_text`] except `null`, which matches as the literal `null`.
pub fn cell_filter_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        other => cell_text(other),
    }
}

/// Decode a JSON response body into a dataset.
///
/// # Errors
///
/// Returns the serde error when the body is not a JSON array of objects.
pub fn parse_dataset(body: &str) -> Result<Dataset, serde_json::Error> {
    serde_json::from_str(body)
}
