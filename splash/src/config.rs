//! Build-time configuration for the splash page.
//!
//! A CSR bundle has no process environment at runtime, so everything that can
//! vary between deployments is read with `option_env!` when trunk compiles the
//! crate. The rest are plain constants.

/// Version string shown in the nav and hero badge
pub const VERSION: &str = "v0.8.14";

/// GitHub repository metadata endpoint (stargazers_count lives here)
const DEFAULT_REPO_API: &str = "https://api.github.com/repos/Loctree/Loctree";

/// `localStorage` key holding `"dark"` or `"light"`
pub const THEME_STORAGE_KEY: &str = "loctree-theme";

pub const GITHUB_URL: &str = "https://github.com/Loctree/Loctree";
pub const CRATES_URL: &str = "https://crates.io/crates/loctree";
pub const DOCS_URL: &str = "https://docs.rs/loctree";
pub const DISCORD_URL: &str = "https://discord.gg/loctree";
pub const VIDEO_EMBED_URL: &str = "https://www.youtube-nocookie.com/embed/loctree-demo";

/// Endpoint queried once on mount for the star count.
pub fn repo_api_url() -> &'static str {
    non_blank(option_env!("LOCTREE_REPO_API")).unwrap_or(DEFAULT_REPO_API)
}

/// Optional bearer token for the GitHub API (raises the anonymous rate limit).
pub fn github_token() -> Option<&'static str> {
    non_blank(option_env!("LOCTREE_GITHUB_TOKEN"))
}

fn non_blank(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
