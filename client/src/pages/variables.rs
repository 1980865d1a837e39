//! Variables page: the application shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the panel state and every backend request. Requests are independent
//! `spawn_local` tasks with no cancellation; each one applies its result to
//! state when it lands, so overlapping commands resolve as last-arrival-wins.

use leptos::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::components::command_panel::CommandPanel;
use crate::components::filter_bar::FilterBar;
use crate::components::license_card::LicenseCard;
use crate::components::sheet::{Sheet, SheetContent, SheetTrigger, Side, TriggerMode};
use crate::components::variable_table::VariableTable;
use crate::net::types::Command;
use crate::state::license::LicenseState;
use crate::state::sheet::SheetState;
use crate::state::variables::VariablesState;

/// Table, filter, license card and the slide-over command panel.
#[component]
pub fn VariablesPage() -> impl IntoView {
    let variables = expect_context::<RwSignal<VariablesState>>();
    let license = expect_context::<RwSignal<LicenseState>>();
    let sheet = RwSignal::new(SheetState::default());

    let execute_command = Callback::new(move |command: Command| {
        #[cfg(feature = "hydrate")]
        {
            let argument = variables.with_untracked(|v| v.argument.clone());
            leptos::task::spawn_local(async move {
                let result = crate::net::api::run_command(command, &argument).await;
                variables.update(|v| {
                    v.apply_fetch(command, result);
                });
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (command, variables);
        }
    });

    let download_file = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_download().await {
                Ok(bytes) => {
                    if let Err(e) = crate::util::download::save_bytes(&bytes) {
                        log::warn!("saving {} failed: {e}", crate::util::download::EXPORT_FILENAME);
                    }
                }
                Err(e) => log::warn!("download failed: {e}"),
            }
        });
    });

    let fetch_license = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_license().await;
            license.update(|l| {
                l.apply_fetch(result);
            });
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = license;
        }
    });

    // Initial load.
    Effect::new(move || execute_command.run(Command::Read));

    view! {
        <div class="variables-page">
            <Sheet>
                <SheetTrigger sheet=sheet mode=TriggerMode::AsChild>
                    <Button variant=ButtonVariant::Ghost class="variables-page__menu">
                        "☰"
                    </Button>
                </SheetTrigger>
                <SheetContent sheet=sheet side=Side::Left class="variables-page__panel">
                    <CommandPanel
                        on_command=execute_command
                        on_download=download_file
                        on_license=fetch_license
                    />
                </SheetContent>
            </Sheet>

            <main class="variables-page__main">
                <FilterBar/>
                <LicenseCard/>
                <VariableTable/>
            </main>
        </div>
    }
}
