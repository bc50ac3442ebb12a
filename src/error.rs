use std::num::ParseFloatError;

/// Reasons a piece of user input was rejected as a distance in miles.
///
/// The `Display` output of every variant is meant to be shown to the user as-is.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("Please enter a value in miles.")]
    Empty,
    #[error("could not convert {input:?} to a number")]
    NotANumber {
        input: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("Miles cannot be negative.")]
    Negative(f64),
    #[error("{0:?} is not a finite distance")]
    NotFinite(String),
}
