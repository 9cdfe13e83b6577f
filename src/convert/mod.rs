mod literal;
mod tables;

use crate::resolve::{ResolveError, StyleResolver};
use crate::style::Category;
use literal::{Segment, scan};
use log::warn;
use tables::{ICU_TO_CHRONO, ICU_TO_MOMENT, RunTable, php_replacement, run_replacement};

/// Format strings carrying this prefix are PHP `date()` patterns rather than
/// ICU patterns or style names.
pub const PHP_PREFIX: &str = "php:";

/// Translates date/time format patterns between dialects.
///
/// Conversion never fails on malformed or unsupported input; tokens without a
/// target-dialect equivalent are omitted and the output degrades rather than
/// erroring. The only failure path is locale-aware style resolution for an
/// unknown locale, which propagates from the wrapped [`StyleResolver`].
pub struct FormatConverter {
    resolver: StyleResolver,
}

impl FormatConverter {
    pub fn new(resolver: StyleResolver) -> Self {
        FormatConverter { resolver }
    }

    /// A converter whose style resolution uses the static fallback table.
    pub fn without_locale_data() -> Self {
        FormatConverter {
            resolver: StyleResolver::without_locale_data(),
        }
    }

    pub fn resolver(&self) -> &StyleResolver {
        &self.resolver
    }

    /// Converts an ICU pattern (or style name) to a moment.js pattern.
    ///
    /// Quoted literal segments are re-emitted in moment's `[...]` wrapper.
    /// Era, quarter and most timezone tokens have no moment equivalent and are
    /// dropped.
    pub fn icu_to_moment(
        &self,
        pattern: &str,
        category: Category,
        locale: &str,
    ) -> Result<String, ResolveError> {
        let pattern = self.resolver.resolve(pattern, category, locale)?;
        Ok(substitute_runs(
            &pattern,
            ICU_TO_MOMENT,
            &wrap_moment_literal,
            &|raw| raw.to_string(),
        ))
    }

    /// Converts an ICU pattern (or style name) to a chrono strftime string
    /// suitable for strict parsing with chrono's naive types.
    pub fn icu_to_chrono(
        &self,
        pattern: &str,
        category: Category,
        locale: &str,
    ) -> Result<String, ResolveError> {
        let pattern = self.resolver.resolve(pattern, category, locale)?;
        Ok(substitute_runs(
            &pattern,
            ICU_TO_CHRONO,
            &escape_chrono_literal,
            &escape_chrono_literal,
        ))
    }

    /// Converts a PHP `date()` pattern to a moment.js pattern.
    ///
    /// The PHP dialect has no literal-escaping convention this converter
    /// recognizes: every character outside the substitution table passes
    /// through as-is, so literal text containing token letters will be
    /// corrupted. That is a limitation of the source dialect, not something
    /// detectable here. Style names never occur in this dialect.
    pub fn php_to_moment(pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| match php_replacement(c) {
                Some(replacement) => replacement.to_string(),
                None => c.to_string(),
            })
            .collect()
    }

    /// Converts any supported input format to a moment.js pattern, routing
    /// `php:`-prefixed strings to the PHP converter and everything else
    /// through ICU conversion.
    pub fn to_moment(
        &self,
        format: &str,
        category: Category,
        locale: &str,
    ) -> Result<String, ResolveError> {
        match format.strip_prefix(PHP_PREFIX) {
            Some(php_pattern) => Ok(Self::php_to_moment(php_pattern)),
            None => self.icu_to_moment(format, category, locale),
        }
    }
}

/// Rewrites every token run of `pattern` through `table`. Quoted literals go
/// through `literal`, unquoted separator text through `raw`.
fn substitute_runs(
    pattern: &str,
    table: RunTable,
    literal: &dyn Fn(&str) -> String,
    raw: &dyn Fn(&str) -> String,
) -> String {
    let mut out = String::with_capacity(pattern.len());
    for segment in scan(pattern) {
        match segment {
            Segment::Literal(text) => out.push_str(&literal(&text)),
            Segment::Raw(text) => out.push_str(&raw(&text)),
            Segment::Run(token, length) => match run_replacement(table, token, length) {
                Some(replacement) => out.push_str(replacement),
                None => {
                    warn!("dropping unsupported pattern token '{}'", token.to_string().repeat(length));
                }
            },
        }
    }
    out
}

fn wrap_moment_literal(text: &str) -> String {
    format!("[{text}]")
}

fn escape_chrono_literal(text: &str) -> String {
    text.replace('%', "%%")
}
