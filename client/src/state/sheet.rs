//! Open/closed state of the slide-over navigation panel.
//!
//! Built once by the application shell and handed to both `SheetTrigger` and
//! `SheetContent`, so neither needs to discover the other.

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;

/// Slide-over visibility. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SheetState {
    pub open: bool,
}

impl SheetState {
    /// Flip between open and closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}
