//! Card showing the fetched license text verbatim.

use leptos::prelude::*;

use crate::components::card::{Card, CardContent};
use crate::state::license::LicenseState;

/// Rendered only while the stored license text is non-empty.
#[component]
pub fn LicenseCard() -> impl IntoView {
    let license = expect_context::<RwSignal<LicenseState>>();

    view! {
        <Show when=move || license.with(LicenseState::is_visible)>
            <Card class="license-card">
                <CardContent>
                    <pre class="license-card__text">{move || license.with(|l| l.text.clone())}</pre>
                </CardContent>
            </Card>
        </Show>
    }
}
