use crate::config::GITHUB_URL;
use crate::state::UiState;
use leptos::prelude::*;

/// Sticky "get started" pill, shown once the visitor has scrolled into a long page.
#[component]
pub fn FloatingCta(ui: UiState) -> impl IntoView {
    view! {
        <div
            class=move || if ui.scrolled.get() { "floating-cta visible" } else { "floating-cta" }
            aria-hidden=move || (!ui.scrolled.get()).to_string()
        >
            <a href="#products" class="btn btn-primary">"Get Started"</a>
            <a href=GITHUB_URL target="_blank" class="btn btn-secondary">"GitHub →"</a>
        </div>
    }
}
