//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`variables`, `license`, `sheet`) so each
//! component depends on a small focused model. Every model is a plain struct
//! wrapped in an `RwSignal` by the application shell.

pub mod license;
pub mod sheet;
pub mod variables;
