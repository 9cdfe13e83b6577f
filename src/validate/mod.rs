pub mod error;

pub use error::ValidationError;

use crate::convert::FormatConverter;
use crate::style::Category;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

/// The format a validator falls back to when none is configured. Matches the
/// default display format of the surrounding form layer.
const DEFAULT_FORMAT: &str = "medium";

/// Outcome of a successful validation, shaped by the validator's category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedValue {
    Date(NaiveDate),
    Time(NaiveTime),
    DateTime(NaiveDateTime),
}

/// Validates user-entered date/time strings against an ICU pattern or style
/// shorthand.
///
/// The category disambiguates which of date/time/both is expected when the
/// format is one of the ambiguous style names; with a concrete pattern it
/// still decides which chrono type the input parses into.
pub struct DateTimeValidator {
    /// ICU pattern or style name. `None` falls back to the `medium` style.
    pub format: Option<String>,
    pub category: Category,
    pub locale: String,
}

impl DateTimeValidator {
    pub fn new(category: Category, locale: impl Into<String>) -> Self {
        DateTimeValidator {
            format: None,
            category,
            locale: locale.into(),
        }
    }

    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// Parses `value` strictly against the resolved format.
    pub fn validate(
        &self,
        value: &str,
        converter: &FormatConverter,
    ) -> Result<ParsedValue, ValidationError> {
        let format = self.format.as_deref().unwrap_or(DEFAULT_FORMAT);
        let pattern =
            converter
                .resolver()
                .validation_pattern(format, self.category, &self.locale)?;
        let chrono_format = converter.icu_to_chrono(&pattern, self.category, &self.locale)?;
        debug!("validating '{value}' against '{chrono_format}'");

        let parsed = match self.category {
            Category::Date => NaiveDate::parse_from_str(value, &chrono_format)
                .map(ParsedValue::Date),
            Category::Time => NaiveTime::parse_from_str(value, &chrono_format)
                .map(ParsedValue::Time),
            Category::DateTime => NaiveDateTime::parse_from_str(value, &chrono_format)
                .map(ParsedValue::DateTime),
        };
        parsed.map_err(|_| ValidationError::InvalidValue {
            value: value.to_string(),
            category: self.category.to_string(),
            format: pattern,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn accepts_a_date_matching_the_pattern() {
        let converter = FormatConverter::without_locale_data();
        let validator =
            DateTimeValidator::new(Category::Date, "en-US").with_format("dd/MM/yyyy");
        assert_eq!(
            validator.validate("31/12/2024", &converter).unwrap(),
            ParsedValue::Date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap())
        );
    }

    #[rstest]
    #[case("2024-31-12")]
    #[case("31/13/2024")]
    #[case("not a date")]
    #[case("")]
    fn rejects_values_off_the_pattern(#[case] value: &str) {
        let converter = FormatConverter::without_locale_data();
        let validator =
            DateTimeValidator::new(Category::Date, "en-US").with_format("dd/MM/yyyy");
        let err = validator.validate(value, &converter).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { .. }));
    }

    #[test]
    fn style_shorthand_is_disambiguated_by_category() {
        let converter = FormatConverter::without_locale_data();
        // short/date resolves to M/d/yy in the fallback table.
        let validator = DateTimeValidator::new(Category::Date, "en-US").with_format("short");
        assert_eq!(
            validator.validate("6/1/24", &converter).unwrap(),
            ParsedValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );

        // The same shorthand validates a time when the category says so.
        let validator = DateTimeValidator::new(Category::Time, "en-US").with_format("short");
        assert_eq!(
            validator.validate("13:45", &converter).unwrap(),
            ParsedValue::Time(NaiveTime::from_hms_opt(13, 45, 0).unwrap())
        );
    }

    #[test]
    fn datetime_category_parses_both_parts() {
        let converter = FormatConverter::without_locale_data();
        let validator = DateTimeValidator::new(Category::DateTime, "en-US")
            .with_format("yyyy-MM-dd HH:mm:ss");
        assert_eq!(
            validator.validate("2024-02-29 08:30:00", &converter).unwrap(),
            ParsedValue::DateTime(
                NaiveDate::from_ymd_opt(2024, 2, 29)
                    .unwrap()
                    .and_hms_opt(8, 30, 0)
                    .unwrap()
            )
        );
    }

    #[test]
    fn missing_format_defaults_to_medium() {
        let converter = FormatConverter::without_locale_data();
        let validator = DateTimeValidator::new(Category::Date, "en-US");
        // medium/date fallback is `MMM d, yyyy`.
        assert_eq!(
            validator.validate("Jun 1, 2024", &converter).unwrap(),
            ParsedValue::Date(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
        );
    }
}
