//! Card container primitives.

#[cfg(test)]
#[path = "card_test.rs"]
mod card_test;

use leptos::prelude::*;

use super::button::with_extra_class;

pub fn card_class(extra: &str) -> String {
    with_extra_class("card", extra)
}

pub fn card_content_class(extra: &str) -> String {
    with_extra_class("card__content", extra)
}

/// Bordered surface.
#[component]
pub fn Card(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=card_class(&class)>{children()}</div> }
}

/// Padded body of a [`Card`].
#[component]
pub fn CardContent(#[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    view! { <div class=card_content_class(&class)>{children()}</div> }
}
