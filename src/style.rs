//! Inline styling helpers shared by the template renderers.
//!
//! Rendered entries use a tiny HTML subset (`<i>`, `<b>`) that every
//! downstream dictionary format knows how to display.

/// Wraps `text` in an italic span.
pub fn italic(text: &str) -> String {
    format!("<i>{}</i>", text)
}

/// Wraps `text` in a bold span.
pub fn strong(text: &str) -> String {
    format!("<b>{}</b>", text)
}

/// Uppercases the first character, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Formats a "term": italicized and parenthesized. Empty input stays empty.
pub fn term(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    italic(&format!("({})", text))
}

/// Formats a number with the given decimal and thousands separators.
///
/// The integer digits are grouped in threes; the fractional part (when the
/// value has one) is appended after `float_sep`.
pub fn number(value: f64, float_sep: char, thousands_sep: char) -> String {
    let repr = value.to_string();
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((int, frac)) => (int, Some(frac)),
        None => (repr.as_str(), None),
    };
    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let mut out = String::with_capacity(repr.len() + digits.len() / 3 + 1);
    out.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(thousands_sep);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(float_sep);
        out.push_str(frac);
    }
    out
}
