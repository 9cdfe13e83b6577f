use crate::resolve::error::ResolveError;
use crate::style::{Category, Style};

/// Locale-aware source of concrete ICU patterns.
///
/// Implementations are expected to apply the style to both the date and the
/// time length for [`Category::DateTime`]; the style model offers no
/// independent control over the two.
pub trait PatternProvider {
    /// Returns the concrete ICU pattern for the given triple, or
    /// [`ResolveError::UnrecognizedLocale`] if the locale is unknown.
    fn pattern(
        &self,
        locale: &str,
        style: Style,
        category: Category,
    ) -> Result<String, ResolveError>;
}
