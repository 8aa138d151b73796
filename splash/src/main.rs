// loctree Splash Page — Leptos 0.8 Edition
// Developed with 💀 by The Loctree Team (c)2025

mod config;
mod console;
mod debounce;
mod menu;
mod scroll;
mod sections;
mod stars;
mod state;
mod theme;

use leptos::prelude::*;
use sections::*;
use state::UiState;
use theme::Theme;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    let ui = UiState::new();
    let theme = Theme::init();
    let stars = RwSignal::new(None::<u64>);

    stars::load_star_count(stars);
    scroll::track_floating_cta(ui);

    view! {
        <Nav ui=ui theme=theme stars=stars />
        <main>
            <Hero ui=ui stars=stars />
            <ProductCards />
        </main>
        <FloatingCta ui=ui />
        <VideoModal ui=ui />
        <Footer theme=theme />
    }
}
