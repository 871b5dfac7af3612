use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode::{self, Theme};

/// Light/dark switch shared by both navigation bars.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <button
            class="btn theme-toggle"
            on:click=move |_| {
                let next = dark_mode::toggle(ui.get_untracked().theme);
                ui.update(|u| u.theme = next);
            }
            title="Toggle theme"
            aria-label="Toggle theme"
        >
            {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
