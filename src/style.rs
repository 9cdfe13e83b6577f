use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A locale-dependent shorthand for a concrete ICU pattern.
///
/// Style names are not patterns themselves; they must be resolved against a
/// locale and a [`Category`] before any dialect conversion takes place.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Short,
    Medium,
    Long,
    Full,
}

/// Which kind of value a pattern describes.
///
/// Determines the concrete pattern a [`Style`] resolves to, and which chrono
/// type the validator parses user input into.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Date,
    Time,
    DateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("short", Style::Short)]
    #[case("medium", Style::Medium)]
    #[case("long", Style::Long)]
    #[case("full", Style::Full)]
    fn style_round_trips_through_its_name(#[case] name: &str, #[case] style: Style) {
        assert_eq!(name.parse::<Style>().unwrap(), style);
        assert_eq!(style.to_string(), name);
    }

    #[test]
    fn concrete_patterns_are_not_styles() {
        assert!("yyyy-MM-dd".parse::<Style>().is_err());
        assert!("".parse::<Style>().is_err());
    }

    #[test]
    fn datetime_parses_lowercase() {
        assert_eq!("datetime".parse::<Category>().unwrap(), Category::DateTime);
        assert_eq!(Category::DateTime.to_string(), "datetime");
    }
}
