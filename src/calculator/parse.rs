//! Tolerant parsing of the numeric text fields.

/// Parse the leading decimal number of `text`.
///
/// Leading whitespace is skipped and trailing text after the number is
/// ignored, so "70kg" reads as 70. Returns `None` when no digits lead the
/// text or the value is not finite.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let prefix = leading_decimal(text.trim_start())?;
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Like [`parse_decimal`], but unparsable text counts as zero.
pub fn parse_decimal_or_zero(text: &str) -> f64 {
    parse_decimal(text).unwrap_or(0.0)
}

/// Keep only ASCII digits and '.' ("178 cm" becomes "178").
pub fn strip_to_numeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

/// Longest prefix shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_decimal(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    Some(&text[..end])
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
