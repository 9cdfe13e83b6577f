use crate::style::{Category, Style};

/// Static patterns used when no [`crate::resolve::PatternProvider`] is
/// configured. They match en-US, except the time is in 24-hour format so the
/// fallback path needs no AM/PM locale data.
pub(crate) fn fallback_pattern(style: Style, category: Category) -> &'static str {
    match (style, category) {
        (Style::Short, Category::Date) => "M/d/yy",
        (Style::Short, Category::Time) => "HH:mm",
        (Style::Short, Category::DateTime) => "M/d/yy HH:mm",
        (Style::Medium, Category::Date) => "MMM d, yyyy",
        (Style::Medium, Category::Time) => "HH:mm:ss",
        (Style::Medium, Category::DateTime) => "MMM d, yyyy HH:mm:ss",
        (Style::Long, Category::Date) => "MMMM d, yyyy",
        (Style::Long, Category::Time) => "HH:mm:ss",
        (Style::Long, Category::DateTime) => "MMMM d, yyyy HH:mm:ss",
        (Style::Full, Category::Date) => "eeee, MMMM d, yyyy",
        (Style::Full, Category::Time) => "HH:mm:ss zzz",
        (Style::Full, Category::DateTime) => "eeee, MMMM d, yyyy HH:mm:ss zzz",
    }
}
