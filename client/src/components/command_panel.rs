//! Action buttons shown inside the slide-over panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel only reports clicks; the page owns the requests. The optional
//! argument input feeds the query parameter sent with the next command.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::components::button::Button;
use crate::net::types::Command;
use crate::state::variables::VariablesState;

#[component]
pub fn CommandPanel(
    on_command: Callback<Command>,
    on_download: Callback<()>,
    on_license: Callback<()>,
) -> impl IntoView {
    let variables = expect_context::<RwSignal<VariablesState>>();

    let command_buttons = Command::ALL
        .into_iter()
        .map(|command| {
            let on_click = Callback::new(move |_: MouseEvent| on_command.run(command));
            view! {
                <Button class="command-panel__button" on_click=on_click>
                    {command.label()}
                </Button>
            }
        })
        .collect_view();

    view! {
        <div class="command-panel">
            <input
                class="command-panel__argument"
                type="text"
                placeholder="Project filter or variable key"
                prop:value=move || variables.with(|v| v.argument.clone())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    variables.update(|v| v.argument = value);
                }
            />
            {command_buttons}
            <Button
                class="command-panel__button"
                on_click=Callback::new(move |_: MouseEvent| on_download.run(()))
            >
                "Download XLSX"
            </Button>
            <Button
                class="command-panel__button"
                on_click=Callback::new(move |_: MouseEvent| on_license.run(()))
            >
                "License"
            </Button>
        </div>
    }
}
