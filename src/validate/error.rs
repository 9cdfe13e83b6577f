use crate::resolve::ResolveError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The input does not match the expected format.
    #[error("'{value}' is not a valid {category} in format '{format}'")]
    InvalidValue {
        value: String,
        category: String,
        format: String,
    },
    #[error(transparent)]
    Resolve(#[from] ResolveError),
}
