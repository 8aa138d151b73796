use leptos::prelude::*;

#[component]
pub fn ProductCards() -> impl IntoView {
    view! {
        <section id="products" class="products">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"The loctree family"</p>
                    <h2 class="section-title">"One snapshot, every surface"</h2>
                    <p class="section-description">
                        "The same project map, wherever you and your agents work."
                    </p>
                </div>
                <div class="products-grid">
                    <ProductCard
                        title="loct CLI"
                        description="Scan, slice, and query your codebase. Dead code, cycles, twins and impact analysis from one binary."
                        install="cargo install loctree"
                        href="https://crates.io/crates/loctree"
                    />
                    <ProductCard
                        title="loctree-mcp"
                        description="MCP server exposing the snapshot to AI agents: slices, symbol lookups and impact checks as tools."
                        install="cargo install loctree-mcp"
                        href="https://crates.io/crates/loctree-mcp"
                    />
                    <ProductCard
                        title="loctree LSP"
                        description="Editor diagnostics for dead exports and import cycles, with quick fixes and hover context."
                        install="cargo install loctree-lsp"
                        href="https://crates.io/crates/loctree-lsp"
                    />
                    <ProductCard
                        title="report-leptos"
                        description="Static HTML reports rendered with Leptos SSR. Health gauge, graphs and AI summaries, no JS runtime."
                        install="cargo add report-leptos"
                        href="https://docs.rs/report-leptos"
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(
    title: &'static str,
    description: &'static str,
    install: &'static str,
    href: &'static str,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);

    let copy_install = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().clipboard().write_text(install);
            set_copied.set(true);
            set_timeout(
                move || set_copied.set(false),
                std::time::Duration::from_millis(1500),
            );
        }
    };

    view! {
        <article class="product-card">
            <h3 class="product-title">
                <a href=href target="_blank">{title}</a>
            </h3>
            <p class="product-description">{description}</p>
            <div class="product-code-box">
                <code class="product-code-text">{install}</code>
                <button class="product-copy-btn" on:click=copy_install>
                    {move || if copied.get() { "ok" } else { "cp" }}
                </button>
            </div>
        </article>
    }
}
