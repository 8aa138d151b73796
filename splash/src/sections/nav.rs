use crate::config::{DISCORD_URL, DOCS_URL, GITHUB_URL, VERSION};
use crate::menu::close_on_outside_click;
use crate::state::UiState;
use crate::stars::display_star_count;
use crate::theme::{Theme, ThemeToggle};
use leptos::html;
use leptos::prelude::*;

#[component]
pub fn Nav(ui: UiState, theme: Theme, stars: RwSignal<Option<u64>>) -> impl IntoView {
    let menu_ref = NodeRef::<html::Div>::new();
    close_on_outside_click(ui, menu_ref);

    let logo = move || theme.preference.get().logo_src();
    let close_menu = move |_| ui.menu_open.set(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <div class="nav-logo">
                        <img src=logo alt="loctree" />
                    </div>
                    <span class="nav-title">"loctree"</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class="nav-links">
                    <a href="#products" class="nav-link">"Products"</a>
                    <a href=DOCS_URL target="_blank" class="nav-link">"Docs"</a>
                    <a href=DISCORD_URL target="_blank" class="nav-link">"Discord"</a>
                    <StarBadge stars=stars />
                    <ThemeToggle theme=theme />
                </div>

                // Mobile: hamburger + panel share one container for outside-click checks
                <div class="nav-mobile" node_ref=menu_ref>
                    <ThemeToggle theme=theme />
                    <button
                        class=move || if ui.menu_open.get() { "nav-burger active" } else { "nav-burger" }
                        aria-label="Toggle navigation"
                        aria-expanded=move || ui.menu_open.get().to_string()
                        on:click=move |_| ui.toggle_menu()
                    >
                        {move || if ui.menu_open.get() { "✕" } else { "☰" }}
                    </button>
                    <Show when=move || ui.menu_open.get()>
                        <div class="nav-drawer">
                            <a href="#products" class="nav-drawer-link" on:click=close_menu>"Products"</a>
                            <a href=DOCS_URL target="_blank" class="nav-drawer-link" on:click=close_menu>"Docs"</a>
                            <a href=DISCORD_URL target="_blank" class="nav-drawer-link" on:click=close_menu>"Discord"</a>
                            <a href=GITHUB_URL target="_blank" class="nav-drawer-link" on:click=close_menu>
                                "GitHub ★ " {move || display_star_count(stars.get())}
                            </a>
                        </div>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

#[component]
fn StarBadge(stars: RwSignal<Option<u64>>) -> impl IntoView {
    view! {
        <a href=GITHUB_URL target="_blank" class="nav-stars" title="Star loctree on GitHub">
            <span class="nav-stars-label">"GitHub"</span>
            <span class="nav-stars-count">"★ " {move || display_star_count(stars.get())}</span>
        </a>
    }
}
