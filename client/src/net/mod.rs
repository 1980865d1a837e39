//! Networking modules for the variables backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the plain GET calls behind every panel button and `types`
//! defines the untyped row schema they return.

pub mod api;
pub mod types;
