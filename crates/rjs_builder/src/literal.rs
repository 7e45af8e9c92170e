//! Numeric and string literal conversion.

use rjs_ast::NodeKind;

/// 2^63, the first float past the `i64` range.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Convert decimal literal text to an integer node when the value is a whole
/// number that fits `i64`, otherwise to a float node.
///
/// Text that does not parse as a whole degrades to its longest numeric
/// prefix, or NaN if there is none. This never fails.
pub fn decimal_literal(text: &str) -> NodeKind {
    let value = match text.parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            let value = parse_float_prefix(text);
            tracing::debug!(text, value, "decimal literal degraded to float");
            return NodeKind::FloatNumber(value);
        }
    };
    if value.is_finite() && value.trunc() == value && (-I64_LIMIT..I64_LIMIT).contains(&value) {
        NodeKind::IntNumber(value as i64)
    } else {
        if value.trunc() == value {
            tracing::debug!(text, "decimal literal out of integer range");
        }
        NodeKind::FloatNumber(value)
    }
}

fn parse_float_prefix(text: &str) -> f64 {
    (1..text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// Parse an integer literal in `radix` (8 or 16), wrapping on overflow.
///
/// A `0x`/`0X` prefix is accepted for hex and `0o`/`0O` for octal; a plain
/// leading zero is just a digit. Returns `None` when there are no digits or
/// a digit is out of range.
pub fn radix_literal(text: &str, radix: u32) -> Option<i64> {
    let digits = match radix {
        16 => text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text),
        8 => text
            .strip_prefix("0o")
            .or_else(|| text.strip_prefix("0O"))
            .unwrap_or(text),
        _ => text,
    };
    if digits.is_empty() {
        return None;
    }
    let base = i64::from(radix);
    let mut wrapped = false;
    let value = digits.chars().try_fold(0i64, |acc, c| {
        let digit = i64::from(c.to_digit(radix)?);
        let next = acc.checked_mul(base).and_then(|v| v.checked_add(digit));
        Some(next.unwrap_or_else(|| {
            wrapped = true;
            acc.wrapping_mul(base).wrapping_add(digit)
        }))
    })?;
    if wrapped {
        tracing::debug!(text, value, radix, "radix literal wrapped to 64 bits");
    }
    Some(value)
}

/// Strip the surrounding quotes from string literal text and decode its
/// escape sequences.
pub fn string_literal(text: &str) -> String {
    let inner = match text.chars().next() {
        Some(quote @ ('"' | '\'')) if text.len() >= 2 && text.ends_with(quote) => {
            &text[1..text.len() - 1]
        }
        _ => text,
    };
    decode_escapes(inner)
}

fn decode_escapes(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('b') => out.push('\u{8}'),
            Some('f') => out.push('\u{c}'),
            Some('v') => out.push('\u{b}'),
            Some('0') if !chars.peek().is_some_and(|c| c.is_ascii_digit()) => out.push('\0'),
            Some('x') => push_hex_escape(&mut out, &mut chars, 'x', 2),
            Some('u') => push_hex_escape(&mut out, &mut chars, 'u', 4),
            // Line continuation
            Some('\n') => {}
            Some('\r') => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

fn push_hex_escape(
    out: &mut String,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    marker: char,
    width: usize,
) {
    let mut hex = String::with_capacity(width);
    while hex.len() < width {
        match chars.peek() {
            Some(&ch) if ch.is_ascii_hexdigit() => {
                hex.push(ch);
                chars.next();
            }
            _ => break,
        }
    }
    let decoded = (hex.len() == width)
        .then(|| u32::from_str_radix(&hex, 16).ok())
        .flatten()
        .and_then(char::from_u32);
    match decoded {
        Some(ch) => out.push(ch),
        None => {
            out.push(marker);
            out.push_str(&hex);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_int_or_float() {
        assert_eq!(decimal_literal("3"), NodeKind::IntNumber(3));
        assert_eq!(decimal_literal("3.0"), NodeKind::IntNumber(3));
        assert_eq!(decimal_literal("1e3"), NodeKind::IntNumber(1000));
        assert_eq!(decimal_literal("3.5"), NodeKind::FloatNumber(3.5));
        assert_eq!(decimal_literal(".25"), NodeKind::FloatNumber(0.25));
    }

    #[test]
    fn test_decimal_out_of_range() {
        assert_eq!(decimal_literal("1e19"), NodeKind::FloatNumber(1e19));
        assert_eq!(decimal_literal("9223372036854775808"), NodeKind::FloatNumber(I64_LIMIT));
        assert_eq!(decimal_literal("-9223372036854775808"), NodeKind::IntNumber(i64::MIN));
        assert_eq!(decimal_literal("1e400"), NodeKind::FloatNumber(f64::INFINITY));
    }

    #[test]
    fn test_decimal_degrades() {
        assert_eq!(decimal_literal("12abc"), NodeKind::FloatNumber(12.0));
        match decimal_literal("abc") {
            NodeKind::FloatNumber(value) => assert!(value.is_nan()),
            other => panic!("expected a float, got {:?}", other),
        }
    }

    #[test]
    fn test_radix() {
        assert_eq!(radix_literal("0x1F", 16), Some(31));
        assert_eq!(radix_literal("0Xff", 16), Some(255));
        assert_eq!(radix_literal("1f", 16), Some(31));
        assert_eq!(radix_literal("17", 8), Some(15));
        assert_eq!(radix_literal("017", 8), Some(15));
        assert_eq!(radix_literal("0x", 16), None);
        assert_eq!(radix_literal("18", 8), None);
        // Wraps instead of failing
        assert_eq!(radix_literal("0x10000000000000000", 16), Some(0));
        assert_eq!(radix_literal("0xffffffffffffffff", 16), Some(-1));
        assert_eq!(radix_literal("0o1777777777777777777777", 8), Some(-1));
        assert_eq!(radix_literal("0x7fffffffffffffff", 16), Some(i64::MAX));
    }

    #[test]
    fn test_string_unquote() {
        assert_eq!(string_literal("\"abc\""), "abc");
        assert_eq!(string_literal("'abc'"), "abc");
        assert_eq!(string_literal("''"), "");
        assert_eq!(string_literal("'"), "'");
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(string_literal(r#""a\nb\tc""#), "a\nb\tc");
        assert_eq!(string_literal(r#"'it\'s'"#), "it's");
        assert_eq!(string_literal(r#""\x41B""#), "AB");
        assert_eq!(string_literal(r#""\q""#), "q");
        assert_eq!(string_literal(r#""\xZ""#), "xZ");
        assert_eq!(string_literal("\"a\\\nb\""), "ab");
        assert_eq!(string_literal(r#""\0""#), "\0");
    }
}
