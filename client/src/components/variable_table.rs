//! Variables table: header from the first row, body from the filtered view.

use leptos::prelude::*;

use crate::net::types::cell_text;
use crate::state::variables::VariablesState;
use crate::util::table::row_stripe_class;

/// Table of the current dataset.
///
/// The header follows the unfiltered dataset, so it stays put while a filter
/// hides every row. Each body row renders its own values in its own key order.
#[component]
pub fn VariableTable() -> impl IntoView {
    let variables = expect_context::<RwSignal<VariablesState>>();

    let body = move || {
        variables
            .with(VariablesState::visible_rows)
            .into_iter()
            .enumerate()
            .map(|(idx, row)| {
                let cells = row
                    .values()
                    .map(|value| view! { <td class="variable-table__cell">{cell_text(value)}</td> })
                    .collect_view();
                view! { <tr class=row_stripe_class(idx)>{cells}</tr> }
            })
            .collect_view()
    };

    view! {
        <div class="variable-table__scroll">
            <table class="variable-table">
                <thead>
                    <Show when=move || variables.with(|v| !v.rows.is_empty())>
                        <tr class="variable-table__head">
                            <For
                                each=move || variables.with(VariablesState::headers)
                                key=|header| header.clone()
                                children=|header| view! { <th class="variable-table__header">{header}</th> }
                            />
                        </tr>
                    </Show>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
