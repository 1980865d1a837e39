//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `button`, `card` and `sheet` are stateless primitives; the remaining
//! components read the variables and license state from Leptos context.

pub mod button;
pub mod card;
pub mod command_panel;
pub mod filter_bar;
pub mod license_card;
pub mod sheet;
pub mod variable_table;
