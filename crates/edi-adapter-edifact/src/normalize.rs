//! Field normalization helpers
//!
//! All functions here are total: odd-shaped input degrades to empty
//! strings instead of failing.

/// Strip CR/LF anywhere in the text and trim surrounding whitespace.
///
/// Accepts `&str` or `Option<&str>`; an absent value becomes `""`.
pub fn sanitize<'a>(text: impl Into<Option<&'a str>>) -> String {
    text.into()
        .unwrap_or_default()
        .replace(['\n', '\r'], "")
        .trim()
        .to_string()
}

/// Decompose `code:value` into its first two components.
///
/// Components past the second are ignored; a missing second component is `""`.
pub fn split_component(field: &str, separator: u8) -> (&str, &str) {
    let mut parts = field.split(char::from(separator));
    let first = parts.next().unwrap_or_default();
    let second = parts.next().unwrap_or_default();
    (first, second)
}

/// Reformat a `YYMMDD` date as `YY-MM-DDT00:00:00`.
///
/// The slices are taken verbatim: two characters, two characters, then the
/// remainder. Input shorter than six bytes (or not sliceable on character
/// boundaries) yields `""`.
pub fn format_date(value: &str) -> String {
    if value.len() < 6 {
        return String::new();
    }
    match (value.get(..2), value.get(2..4), value.get(4..)) {
        (Some(year), Some(month), Some(day)) => format!("{year}-{month}-{day}T00:00:00"),
        _ => String::new(),
    }
}
