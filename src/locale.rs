//! Locale tag normalization and best-match lookup against the set of locale
//! assets actually shipped to the client.

/// Rewrites underscores to hyphens and lower-cases the tag, the form locale
/// asset files are named after (`de_AT` -> `de-at`).
pub fn normalize(tag: &str) -> String {
    tag.replace('_', "-").to_lowercase()
}

/// Picks the best available locale for `tag`: the exact normalized tag if
/// present, otherwise the primary language subtag. `None` when neither is
/// available, in which case the widget stays on its built-in default locale.
pub fn find_locale<'a>(tag: &str, available: &[&'a str]) -> Option<&'a str> {
    let normalized = normalize(tag);
    if let Some(exact) = available.iter().find(|a| **a == normalized) {
        return Some(exact);
    }
    let primary = normalized.split('-').next()?;
    if primary == normalized {
        // No region subtag to strip, nothing further to try.
        return None;
    }
    available.iter().find(|a| **a == primary).copied()
}
