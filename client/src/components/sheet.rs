//! Slide-over panel: a container, a trigger that toggles it, and the
//! off-canvas content.
//!
//! ARCHITECTURE
//! ============
//! The open flag lives in a `RwSignal<SheetState>` owned by the page and
//! passed explicitly to `SheetTrigger` and `SheetContent`. `SheetContent` is
//! always mounted; closing only swaps its translation class, and the CSS
//! transition animates the move.

#[cfg(test)]
#[path = "sheet_test.rs"]
mod sheet_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use super::button::with_extra_class;
use crate::state::sheet::SheetState;

/// Screen edge the panel slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Side {
    #[default]
    Left,
    Right,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// How a [`SheetTrigger`] attaches its click handler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TriggerMode {
    /// Render a dedicated toggle button around the children.
    #[default]
    Wrapper,
    /// Delegate to the single child: its click bubbles into the toggle through
    /// a `display: contents` wrapper that adds no box of its own.
    AsChild,
}

/// Class string for the panel in the given state.
pub fn sheet_content_class(side: Side, open: bool, extra: &str) -> String {
    let position = if open { "sheet-content--open" } else { "sheet-content--closed" };
    with_extra_class(&format!("sheet-content sheet-content--{} {position}", side.name()), extra)
}

/// Groups a trigger and its content.
#[component]
pub fn Sheet(children: Children) -> impl IntoView {
    view! { <div class="sheet">{children()}</div> }
}

/// Toggles the sheet on click.
#[component]
pub fn SheetTrigger(
    sheet: RwSignal<SheetState>,
    #[prop(optional)] mode: TriggerMode,
    children: Children,
) -> impl IntoView {
    let toggle = move |_: MouseEvent| sheet.update(SheetState::toggle);
    let expanded = move || if sheet.get().open { "true" } else { "false" };

    match mode {
        TriggerMode::AsChild => view! {
            <div class="sheet-trigger sheet-trigger--as-child" aria-expanded=expanded on:click=toggle>
                {children()}
            </div>
        }
        .into_any(),
        TriggerMode::Wrapper => view! {
            <button type="button" class="sheet-trigger" aria-expanded=expanded on:click=toggle>
                {children()}
            </button>
        }
        .into_any(),
    }
}

/// Off-canvas panel body.
#[component]
pub fn SheetContent(
    sheet: RwSignal<SheetState>,
    #[prop(optional)] side: Side,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let classes = move || sheet_content_class(side, sheet.get().open, &class);
    let hidden = move || if sheet.get().open { "false" } else { "true" };

    view! {
        <aside class=classes aria-hidden=hidden>
            {children()}
        </aside>
    }
}
