//! Lenient numeric coercion for form inputs.
//!
//! Number inputs arrive as text. They are read the way a browser's
//! `parseInt`/`parseFloat` read them: leading whitespace is skipped, the
//! longest numeric prefix wins, and anything after it is ignored. Input with
//! no numeric prefix becomes [`Coerced::NotANumber`], which is forwarded to the
//! API untouched; the API decides whether to reject it.

use std::fmt;

use serde::{Serialize, Serializer};

/// Result of coercing a text field into a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced<T> {
    /// A number was read from the input.
    Value(T),
    /// No number could be read. Serialized as JSON `null`.
    NotANumber,
}

impl<T: Copy> Coerced<T> {
    /// The parsed number, if any.
    pub fn value(&self) -> Option<T> {
        match self {
            Coerced::Value(value) => Some(*value),
            Coerced::NotANumber => None,
        }
    }

    /// Whether the input could not be read as a number.
    pub fn is_nan(&self) -> bool {
        matches!(self, Coerced::NotANumber)
    }
}

impl Coerced<f64> {
    fn from_float(value: f64) -> Self {
        if value.is_nan() {
            Coerced::NotANumber
        } else {
            Coerced::Value(value)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Coerced<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coerced::Value(value) => write!(f, "{value}"),
            Coerced::NotANumber => f.write_str("NaN"),
        }
    }
}

impl<T: Serialize> Serialize for Coerced<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Coerced::Value(value) => value.serialize(serializer),
            Coerced::NotANumber => serializer.serialize_none(),
        }
    }
}

fn split_sign(input: &str) -> (bool, &str) {
    if let Some(rest) = input.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = input.strip_prefix('+') {
        (false, rest)
    } else {
        (false, input)
    }
}

fn digit_prefix_len(input: &str) -> usize {
    input.bytes().take_while(u8::is_ascii_digit).count()
}

/// Reads an integer prefix. `"45"`, `" 45 min"` and `"45.9"` all give 45;
/// a `0x`/`0X` prefix switches to hex, so `"0x1A"` gives 26. `"abc"`, `""`
/// and a bare `"0x"` give [`Coerced::NotANumber`], as do values outside `i64`.
pub fn parse_int(input: &str) -> Coerced<i64> {
    let (negative, rest) = split_sign(input.trim_start());
    let (radix, rest) = match rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
        Some(hex) => (16, hex),
        None => (10, rest),
    };
    let digits: Vec<i64> = rest
        .chars()
        .map_while(|ch| ch.to_digit(radix))
        .map(i64::from)
        .collect();
    if digits.is_empty() {
        return Coerced::NotANumber;
    }

    let magnitude = digits.into_iter().try_fold(0_i64, |acc, digit| {
        let acc = acc.checked_mul(i64::from(radix))?;
        if negative {
            acc.checked_sub(digit)
        } else {
            acc.checked_add(digit)
        }
    });

    match magnitude {
        Some(value) => Coerced::Value(value),
        None => Coerced::NotANumber,
    }
}

/// Reads a decimal prefix with optional fraction and exponent. `"1500.50"`
/// gives 1500.5, `"2e3 USD"` gives 2000, `".5"` gives 0.5 and `"Infinity"`
/// gives positive infinity; text without a numeric prefix gives
/// [`Coerced::NotANumber`].
pub fn parse_float(input: &str) -> Coerced<f64> {
    let trimmed = input.trim_start();
    let (negative, rest) = split_sign(trimmed);

    if rest.starts_with("Infinity") {
        return Coerced::Value(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_len = digit_prefix_len(rest);
    let mut end = int_len;
    let mut frac_len = 0;
    if rest[end..].starts_with('.') {
        frac_len = digit_prefix_len(&rest[end + 1..]);
        end += 1 + frac_len;
    }
    if int_len == 0 && frac_len == 0 {
        return Coerced::NotANumber;
    }

    if let Some(exponent) = rest[end..].strip_prefix(|ch: char| ch == 'e' || ch == 'E') {
        let (_, exp_digits) = split_sign(exponent);
        let exp_len = digit_prefix_len(exp_digits);
        if exp_len > 0 {
            end += 1 + (exponent.len() - exp_digits.len()) + exp_len;
        }
    }

    let sign_len = trimmed.len() - rest.len();
    match trimmed[..sign_len + end].parse::<f64>() {
        Ok(value) => Coerced::from_float(value),
        Err(_) => Coerced::NotANumber,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_read_the_leading_number() {
        assert_eq!(parse_int("45"), Coerced::Value(45));
        assert_eq!(parse_int("  12 minutes"), Coerced::Value(12));
        assert_eq!(parse_int("3.9"), Coerced::Value(3));
        assert_eq!(parse_int("-7"), Coerced::Value(-7));
        assert_eq!(parse_int("+8"), Coerced::Value(8));
        assert_eq!(parse_int("007"), Coerced::Value(7));
    }

    #[test]
    fn integers_without_digits_are_nan() {
        for input in ["", "   ", "abc", "-", "+x", ".5", "e3"] {
            assert!(parse_int(input).is_nan(), "{input:?}");
        }
    }

    #[test]
    fn integers_accept_a_hex_prefix() {
        assert_eq!(parse_int("0x1A"), Coerced::Value(26));
        assert_eq!(parse_int(" -0xff px"), Coerced::Value(-255));
        assert_eq!(parse_int("0X10"), Coerced::Value(16));
        assert!(parse_int("0x").is_nan());
        assert!(parse_int("0xg1").is_nan());
        // Only a leading zero turns on hex.
        assert_eq!(parse_int("10x5"), Coerced::Value(10));
    }

    #[test]
    fn integer_overflow_is_nan() {
        assert!(parse_int("99999999999999999999").is_nan());
        assert_eq!(parse_int("-9223372036854775808"), Coerced::Value(i64::MIN));
    }

    #[test]
    fn floats_read_the_leading_number() {
        assert_eq!(parse_float("1500.50"), Coerced::Value(1500.5));
        assert_eq!(parse_float(" 250000"), Coerced::Value(250000.0));
        assert_eq!(parse_float(".5"), Coerced::Value(0.5));
        assert_eq!(parse_float("5."), Coerced::Value(5.0));
        assert_eq!(parse_float("-2.5kg"), Coerced::Value(-2.5));
        assert_eq!(parse_float("2e3 USD"), Coerced::Value(2000.0));
        assert_eq!(parse_float("1.5E-1"), Coerced::Value(0.15));
        assert_eq!(parse_float("7e"), Coerced::Value(7.0));
        assert_eq!(parse_float("7e+"), Coerced::Value(7.0));
        assert_eq!(parse_float("1.2.3"), Coerced::Value(1.2));
        assert_eq!(parse_float("Infinity"), Coerced::Value(f64::INFINITY));
        assert_eq!(parse_float("-Infinity"), Coerced::Value(f64::NEG_INFINITY));
    }

    #[test]
    fn floats_without_digits_are_nan() {
        for input in ["", "  ", "$100", ".", "-.", "e5", "NaN", "infinity"] {
            assert!(parse_float(input).is_nan(), "{input:?}");
        }
    }

    #[test]
    fn not_a_number_serializes_as_null() {
        let nan: Coerced<i64> = Coerced::NotANumber;
        assert_eq!(serde_json::to_string(&nan).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Coerced::Value(42_i64)).unwrap(), "42");
        assert_eq!(serde_json::to_string(&Coerced::Value(12.5_f64)).unwrap(), "12.5");
        assert_eq!(nan.to_string(), "NaN");
        assert_eq!(Coerced::Value(3_i64).value(), Some(3));
    }
}
