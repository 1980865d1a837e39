//! Button primitive with a small set of style variants.

#[cfg(test)]
#[path = "button_test.rs"]
mod button_test;

use leptos::ev::MouseEvent;
use leptos::prelude::*;

/// Visual style of a [`Button`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Filled primary button.
    #[default]
    Default,
    /// Transparent button that only highlights on hover.
    Ghost,
}

impl ButtonVariant {
    fn modifier(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn--primary",
            ButtonVariant::Ghost => "btn--ghost",
        }
    }
}

/// Append `extra` to `base`, skipping blank extras.
pub fn with_extra_class(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_owned()
    } else {
        format!("{base} {extra}")
    }
}

/// Full class string for a button.
pub fn button_class(variant: ButtonVariant, extra: &str) -> String {
    with_extra_class(&format!("btn {}", variant.modifier()), extra)
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(into, optional)] class: String,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=button_class(variant, &class)
            on:click=move |ev: MouseEvent| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
