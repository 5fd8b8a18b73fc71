//! Deployment base path handling.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/evelyn` for a GitHub Pages
//! subdirectory). Builds without it serve from the site root.

/// Base path for the router, `None` when served from root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalized_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Root-anchored URL for a path inside the app.
#[must_use]
pub fn app_href(relative: &str) -> String {
    join(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

fn normalized_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}

fn join(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    normalized_base(base).map_or_else(|| format!("/{rel}"), |base| format!("{base}/{rel}"))
}
