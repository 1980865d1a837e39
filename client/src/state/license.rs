//! License text shown in the license card.

#[cfg(test)]
#[path = "license_test.rs"]
mod license_test;

use crate::net::api::ApiError;

/// Most recently fetched license text. Empty means the card is hidden.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LicenseState {
    pub text: String,
}

impl LicenseState {
    pub fn is_visible(&self) -> bool {
        !self.text.is_empty()
    }

    /// Store a license response. Errors keep the previous text.
    pub fn apply_fetch(&mut self, result: Result<String, ApiError>) -> bool {
        match result {
            Ok(text) => {
                self.text = text;
                true
            }
            Err(e) => {
                leptos::logging::warn!("license fetch failed: {e}");
                false
            }
        }
    }
}
