mod cache;
pub mod error;
mod fallback;
pub mod traits;

pub use error::ResolveError;
pub use traits::PatternProvider;

use crate::style::{Category, Style};
use cache::PatternCache;
use fallback::fallback_pattern;
use log::debug;

type CacheKey = (String, Style, Category);

/// Resolves the style shorthands `short`, `medium`, `long` and `full` into
/// concrete ICU patterns.
///
/// With a [`PatternProvider`] the resolution is locale-aware; without one a
/// static en-US-modeled table with 24-hour times is used. Either way the
/// result is memoized per (locale, style, category) for the lifetime of the
/// resolver.
pub struct StyleResolver {
    provider: Option<Box<dyn PatternProvider>>,
    cache: PatternCache<CacheKey, String>,
}

impl StyleResolver {
    /// A resolver backed by locale data.
    pub fn new(provider: Box<dyn PatternProvider>) -> Self {
        StyleResolver {
            provider: Some(provider),
            cache: PatternCache::new(),
        }
    }

    /// A resolver that only uses the static fallback table. Never fails.
    pub fn without_locale_data() -> Self {
        StyleResolver {
            provider: None,
            cache: PatternCache::new(),
        }
    }

    /// Resolves `pattern` if it is a style name; anything else is returned
    /// unchanged, so callers may pass already-concrete patterns through.
    pub fn resolve(
        &self,
        pattern: &str,
        category: Category,
        locale: &str,
    ) -> Result<String, ResolveError> {
        match pattern.parse::<Style>() {
            Ok(style) => self.concrete_pattern(style, category, locale),
            Err(_) => Ok(pattern.to_owned()),
        }
    }

    /// Resolves a format that may be a bare style name into a pattern strict
    /// enough for parsing. The category decides which of date/time/both the
    /// shorthand expands to, even when the caller has no other context.
    pub fn validation_pattern(
        &self,
        format: &str,
        category: Category,
        locale: &str,
    ) -> Result<String, ResolveError> {
        self.resolve(format, category, locale)
    }

    /// Returns the concrete ICU pattern for a style.
    ///
    /// For [`Category::DateTime`] the style is applied to both the date and
    /// the time length; the style model has no independent control over the
    /// two.
    pub fn concrete_pattern(
        &self,
        style: Style,
        category: Category,
        locale: &str,
    ) -> Result<String, ResolveError> {
        let key = (locale.to_owned(), style, category);
        if let Some(pattern) = self.cache.read(&key) {
            return Ok(pattern);
        }

        let pattern = match &self.provider {
            Some(provider) => provider.pattern(locale, style, category)?,
            None => fallback_pattern(style, category).to_owned(),
        };
        debug!("resolved {style}/{category} for '{locale}' to '{pattern}'");
        self.cache.write(&key, &pattern);
        Ok(pattern)
    }
}
