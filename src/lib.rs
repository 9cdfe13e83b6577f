pub mod convert;
pub mod locale;
pub mod picker;
pub mod resolve;
pub mod style;
pub mod validate;

pub use convert::FormatConverter;
pub use picker::DateTimePicker;
pub use resolve::{PatternProvider, ResolveError, StyleResolver};
pub use style::{Category, Style};
pub use validate::{DateTimeValidator, ParsedValue, ValidationError};
