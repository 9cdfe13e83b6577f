use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// The pattern provider has no data for the requested locale. Only raised
    /// on the provider-backed path; the static fallback table never fails.
    #[error("no locale data for '{locale}'")]
    UnrecognizedLocale { locale: String },
}
