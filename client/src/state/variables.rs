//! Variables table state: the dataset, the filter text and the command argument.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every command response replaces `rows` wholesale. Responses are applied in
//! arrival order, so when two requests overlap the later response wins.

#[cfg(test)]
#[path = "variables_test.rs"]
mod variables_test;

use crate::net::api::ApiError;
use crate::net::types::{Command, Dataset, Row};
use crate::util::table::{filter_rows, header_columns};

/// Table data plus the user-entered filter and command argument.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VariablesState {
    /// Rows from the most recent successful command.
    pub rows: Dataset,
    /// Client-side filter text.
    pub filter: String,
    /// Optional argument sent with the next command.
    pub argument: String,
}

impl VariablesState {
    /// Header columns, taken from the first unfiltered row.
    pub fn headers(&self) -> Vec<String> {
        header_columns(&self.rows)
    }

    /// Rows matching the current filter, in dataset order.
    pub fn visible_rows(&self) -> Vec<Row> {
        filter_rows(&self.rows, &self.filter)
    }

    /// Apply a command response. Returns whether the dataset was replaced.
    ///
    /// Errors leave the previous dataset in place.
    pub fn apply_fetch(&mut self, command: Command, result: Result<Dataset, ApiError>) -> bool {
        match result {
            Ok(rows) => {
                self.rows = rows;
                true
            }
            Err(e) => {
                leptos::logging::warn!("{} failed: {e}", command.name());
                false
            }
        }
    }
}
