use crate::config::{CRATES_URL, DISCORD_URL, DOCS_URL, GITHUB_URL};
use crate::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn Footer(theme: Theme) -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <img src=move || theme.preference.get().logo_src() alt="loctree" />
                    </span>
                    <span class="footer-title">"loctree"</span>
                </div>
                <div class="footer-links">
                    <a href=DISCORD_URL target="_blank" class="footer-link">"Discord"</a>
                    <a href=GITHUB_URL target="_blank" class="footer-link">"GitHub"</a>
                    <a href=CRATES_URL target="_blank" class="footer-link">"crates.io"</a>
                    <a href=DOCS_URL target="_blank" class="footer-link">"docs.rs"</a>
                </div>
                <p class="footer-copyright">
                    "Developed with 💀 by The Loctree Team (c)2025 "
                </p>
            </div>
        </footer>
    }
}
