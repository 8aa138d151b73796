use crate::config::{GITHUB_URL, VERSION};
use crate::state::UiState;
use crate::stars::display_star_count;
use leptos::prelude::*;

#[component]
pub fn Hero(ui: UiState, stars: RwSignal<Option<u64>>) -> impl IntoView {
    let badge_text = format!("{VERSION} — scan once, slice many");
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"Your codebase, mapped"</span>
                            <br />
                            "for agents and the humans who run them."
                        </h1>
                        <p class="hero-description">
                            "One snapshot of your project's real structure. Slice focused context, "
                            "hunt dead exports and circular imports, and keep FE↔BE contracts honest."
                        </p>
                        <div class="hero-actions">
                            <a href="#products" class="btn btn-primary">"Get Started"</a>
                            <button class="btn btn-secondary" on:click=move |_| ui.toggle_video()>
                                "▶ Watch the demo"
                            </button>
                            <a href=GITHUB_URL target="_blank" class="btn btn-ghost">
                                "★ " {move || display_star_count(stars.get())} " on GitHub"
                            </a>
                        </div>
                    </div>
                    <Terminal />
                </div>
            </div>
        </section>
    }
}

#[component]
fn Terminal() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"~/my-project"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"loct"</span>
                </div>
                <div class="terminal-output muted">"[loctree][detect] Detected: Rust workspace"</div>
                <div class="terminal-output success">"✓ Snapshot saved to .loctree/snapshot.json"</div>

                <div class="terminal-line" style="margin-top: 16px;">
                    <span class="terminal-prompt">"$"</span>
                    <span class="terminal-command">"loct dead --confidence high"</span>
                </div>
                <div class="terminal-output highlight">"2 dead exports, 0 cycles"</div>
            </div>
        </div>
    }
}
