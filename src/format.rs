/// Number of decimal digits rendered before trailing zeros are stripped.
const PRECISION: usize = 6;

/// Renders a number for display: thousands are grouped with `,`, the value is rounded to six
/// decimals and trailing zeros (and a dangling `.`) are removed. `1000.0` becomes `"1,000"`,
/// `1.5` becomes `"1.5"`.
///
/// Infinite and NaN values are rendered as `inf`, `-inf` and `NaN`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.*}", PRECISION, value);
    let (sign, unsigned) = match fixed.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", fixed.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));

    let mut out = String::with_capacity(fixed.len() + int_part.len() / 3);
    out.push_str(sign);
    out.push_str(&group_thousands(int_part));
    out.push('.');
    out.push_str(frac_part);

    let trimmed = out.trim_end_matches('0').trim_end_matches('.');
    if trimmed.is_empty() {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}
