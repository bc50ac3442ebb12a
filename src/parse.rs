use crate::error::ParseError;

const NO_BREAK_SPACE: char = '\u{a0}';

/// Cleans up user input before it is parsed as a number: non-breaking spaces become regular
/// spaces, surrounding whitespace is trimmed and thousands separators (`,`) are dropped.
pub fn normalize(text: &str) -> String {
    text.replace(NO_BREAK_SPACE, " ")
        .trim()
        .chars()
        .filter(|c| *c != ',')
        .collect()
}

/// Parses a distance in miles, e.g. `"1,234.5"`.
///
/// # Errors
///
/// Fails if the input is blank, not a number, negative, or not finite (`inf`, `NaN`).
pub fn parse_miles(text: &str) -> Result<f64, ParseError> {
    let cleaned = normalize(text);
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }

    let miles = strip_digit_separators(&cleaned)
        .parse::<f64>()
        .map_err(|source| ParseError::NotANumber {
            input: cleaned.clone(),
            source,
        })?;

    if !miles.is_finite() {
        return Err(ParseError::NotFinite(cleaned));
    }
    if miles < 0.0 {
        return Err(ParseError::Negative(miles));
    }

    tracing::trace!(input = %text, miles, "parsed miles");

    Ok(miles)
}

/// Drops `_` separators that sit between two digits (`1_000`). Any other `_` is kept so the
/// number fails to parse.
fn strip_digit_separators(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    chars
        .iter()
        .enumerate()
        .filter(|&(i, &c)| {
            let between_digits = i > 0
                && chars[i - 1].is_ascii_digit()
                && chars.get(i + 1).map_or(false, char::is_ascii_digit);
            !(c == '_' && between_digits)
        })
        .map(|(_, &c)| c)
        .collect()
}
