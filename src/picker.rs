//! Assembly of the client widget's initialization options.
//!
//! The widget itself is an opaque configuration sink: this module only fills
//! in the `format` and `locale` keys it owns and serializes the merged map;
//! every other option is forwarded untouched.

use crate::convert::FormatConverter;
use crate::locale;
use crate::resolve::ResolveError;
use crate::style::Category;
use log::warn;
use serde_json::{Map, Value, json};

/// Server-side description of one datetime picker input.
pub struct DateTimePicker {
    /// ICU pattern, style name, or `php:`-prefixed PHP pattern.
    pub format: String,
    pub category: Category,
    /// Locale tag; also forwarded to the widget when a matching locale asset
    /// is available.
    pub locale: String,
    /// Additional widget options, forwarded verbatim.
    pub client_options: Map<String, Value>,
}

impl DateTimePicker {
    pub fn new(format: impl Into<String>, category: Category, locale: impl Into<String>) -> Self {
        DateTimePicker {
            format: format.into(),
            category,
            locale: locale.into(),
            client_options: Map::new(),
        }
    }

    pub fn with_option(mut self, key: impl Into<String>, value: Value) -> Self {
        self.client_options.insert(key.into(), value);
        self
    }

    /// Builds the JSON options payload for the widget's initialization call.
    ///
    /// `available_locales` is the set of locale assets shipped to the client;
    /// the `locale` key is only set when one of them matches, since pointing
    /// the widget at a missing locale would break its rendering.
    pub fn payload(
        &self,
        converter: &FormatConverter,
        available_locales: &[&str],
    ) -> Result<Value, ResolveError> {
        let format = converter.to_moment(&self.format, self.category, &self.locale)?;

        let mut options = self.client_options.clone();
        options.insert("format".to_string(), json!(format));
        match locale::find_locale(&self.locale, available_locales) {
            Some(tag) => {
                options.insert("locale".to_string(), json!(tag));
            }
            None => warn!("no locale asset matches '{}'", self.locale),
        }
        Ok(Value::Object(options))
    }
}
