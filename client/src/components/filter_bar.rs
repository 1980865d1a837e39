//! Text input driving the client-side table filter.

use leptos::prelude::*;

use crate::state::variables::VariablesState;

/// Filter input; every keystroke recomputes the visible rows.
#[component]
pub fn FilterBar() -> impl IntoView {
    let variables = expect_context::<RwSignal<VariablesState>>();

    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__input"
                type="search"
                placeholder="Filter table..."
                prop:value=move || variables.with(|v| v.filter.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    variables.update(|v| v.filter = value);
                }
            />
        </div>
    }
}
