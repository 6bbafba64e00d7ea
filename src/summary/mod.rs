//! Display formatting for saved conversions.

use crate::models::HistoryRecord;

/// Significant figures used for non-trivial values
const SIGNIFICANT_FIGURES: usize = 5;
/// Integers rendering to at most this many characters are shown as-is
const MAX_PLAIN_INTEGER_LEN: usize = 5;
/// Digits after the point when expanding an f64 exactly
const EXACT_DIGITS: usize = 770;

/// Format a value for display.
///
/// Short integers (`1`, `-42`, `12345`) are printed unchanged. Everything
/// else is rounded to 5 significant figures, in exponential notation when
/// the decimal exponent is below -6 or at least 5 (`1.2346e+5`) and in
/// fixed notation otherwise (`3.2808`). Negative zero prints as `0`.
pub fn format_value(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    if value.is_finite() && value.fract() == 0.0 {
        let plain = format!("{}", value);
        if plain.len() <= MAX_PLAIN_INTEGER_LEN {
            return plain;
        }
    }
    to_precision(value, SIGNIFICANT_FIGURES)
}

/// Round to `precision` significant figures, ties away from zero
fn to_precision(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }
    if value == 0.0 {
        return format!("{:.*}", precision - 1, 0.0);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    let (digits, exponent) = round_half_up(value.abs(), precision);

    if exponent < -6 || exponent >= precision as i32 {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        let mantissa = match digits.split_at(1) {
            (first, "") => first.to_string(),
            (first, rest) => format!("{}.{}", first, rest),
        };
        format!("{}{}e{}{}", sign, mantissa, exp_sign, exponent.abs())
    } else if exponent >= 0 {
        let (int_part, frac_part) = digits.split_at(exponent as usize + 1);
        if frac_part.is_empty() {
            format!("{}{}", sign, int_part)
        } else {
            format!("{}{}.{}", sign, int_part, frac_part)
        }
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{}0.{}{}", sign, zeros, digits)
    }
}

/// First `precision` significant digits of a positive finite `value` and
/// its decimal exponent, rounded half up on the exact decimal expansion
fn round_half_up(value: f64, precision: usize) -> (String, i32) {
    // An f64 has at most 767 significant decimal digits, so this is exact
    let exact = format!("{:.*e}", EXACT_DIGITS, value);
    let (mantissa, exponent) = exact.split_once('e').unwrap_or((exact.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let all_digits: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    let mut kept = all_digits[..precision].to_vec();
    let round_up = all_digits.get(precision).is_some_and(|d| *d >= b'5');

    if round_up {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            // 9.9999|5 -> 10.000
            kept.insert(0, b'1');
            kept.truncate(precision);
            exponent += 1;
        }
    }

    (String::from_utf8_lossy(&kept).into_owned(), exponent)
}

/// One-line summary of a conversion, as placed on the clipboard:
/// `1 meters [M] = 3.2808 feet [FT]`
pub fn summary(record: &HistoryRecord) -> String {
    format!(
        "{} {} [{}] = {} {} [{}]",
        format_value(record.left_value),
        record.left_unit_full,
        record.left_unit_abbr.to_uppercase(),
        format_value(record.right_value),
        record.right_unit_full,
        record.right_unit_abbr.to_uppercase(),
    )
}
