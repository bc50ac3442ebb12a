pub mod convert;
pub mod error;
pub mod format;
pub mod parse;
pub mod report;
pub mod session;
pub mod utils;

#[cfg(test)]
mod tests;

pub use convert::{convert_miles_to_units, Conversion, Conversions, Unit};
pub use error::ParseError;
pub use format::format_number;
pub use parse::{normalize, parse_miles};
pub use report::Report;
pub use session::Session;
