use moment_format::{
    Category, DateTimePicker, DateTimeValidator, FormatConverter, ParsedValue, PatternProvider,
    ResolveError, Style, StyleResolver,
};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;

/// Locale data for a single German locale, standing in for a real CLDR-backed
/// provider.
struct GermanProvider;

impl PatternProvider for GermanProvider {
    fn pattern(
        &self,
        locale: &str,
        style: Style,
        category: Category,
    ) -> Result<String, ResolveError> {
        if locale != "de" {
            return Err(ResolveError::UnrecognizedLocale {
                locale: locale.to_string(),
            });
        }
        let pattern = match (style, category) {
            (Style::Short, Category::Date) => "dd.MM.yy",
            (Style::Short, Category::Time) => "HH:mm",
            (Style::Short, Category::DateTime) => "dd.MM.yy, HH:mm",
            (Style::Medium, Category::Date) => "dd.MM.y",
            _ => "dd.MM.y, HH:mm:ss",
        };
        Ok(pattern.to_string())
    }
}

#[rstest]
#[case("yyyy-MM-dd", Category::Date, "YYYY-MM-DD")]
#[case("full", Category::Date, "dddd, MMMM D, YYYY")]
#[case("short", Category::Time, "HH:mm")]
#[case("'o''clock' HH:mm", Category::Time, "[o'clock] HH:mm")]
fn icu_to_moment_end_to_end(
    #[case] format: &str,
    #[case] category: Category,
    #[case] expected: &str,
) {
    let converter = FormatConverter::without_locale_data();
    assert_eq!(
        converter.to_moment(format, category, "en-US").unwrap(),
        expected
    );
}

#[test]
fn php_format_end_to_end() {
    let converter = FormatConverter::without_locale_data();
    assert_eq!(
        converter
            .to_moment("php:Y-m-d H:i:s", Category::DateTime, "en-US")
            .unwrap(),
        "YYYY-MM-DD HH:mm:ss"
    );
}

#[test]
fn full_date_style_resolves_then_converts() {
    // The two-step contract: full/date first expands to the concrete fallback
    // pattern, which then converts token by token.
    let resolver = StyleResolver::without_locale_data();
    let pattern = resolver.resolve("full", Category::Date, "en-US").unwrap();
    assert_eq!(pattern, "eeee, MMMM d, yyyy");

    let converter = FormatConverter::without_locale_data();
    assert_eq!(
        converter
            .icu_to_moment(&pattern, Category::Date, "en-US")
            .unwrap(),
        "dddd, MMMM D, YYYY"
    );
}

#[test]
fn provider_backed_conversion_and_failure() {
    let converter = FormatConverter::new(StyleResolver::new(Box::new(GermanProvider)));
    assert_eq!(
        converter.to_moment("short", Category::Date, "de").unwrap(),
        "DD.MM.YY"
    );
    assert_eq!(
        converter.to_moment("short", Category::Date, "tlh"),
        Err(ResolveError::UnrecognizedLocale {
            locale: "tlh".to_string()
        })
    );
}

#[test]
fn widget_options_validator_round_trip() {
    // One input configured for German users: the widget payload and the
    // validator agree on the short date format.
    let converter = FormatConverter::new(StyleResolver::new(Box::new(GermanProvider)));

    let picker = DateTimePicker::new("short", Category::Date, "de");
    let options = picker.payload(&converter, &["de"]).unwrap();
    assert_eq!(
        options,
        json!({
            "format": "DD.MM.YY",
            "locale": "de",
        })
    );

    let validator = DateTimeValidator::new(Category::Date, "de").with_format("short");
    let parsed = validator.validate("24.12.24", &converter).unwrap();
    assert_eq!(
        parsed,
        ParsedValue::Date(chrono::NaiveDate::from_ymd_opt(2024, 12, 24).unwrap())
    );
    assert!(validator.validate("2024-12-24", &converter).is_err());
}
