//! Small line-scanning helpers shared by the readers.

/// Leading run of ASCII digits after optional whitespace.
pub(crate) fn leading_digits(s: &str) -> &str {
    let s = s.trim_start();
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    &s[..end]
}

/// First maximal run of digits and dots anywhere in `s`.
pub(crate) fn first_number(s: &str) -> Option<&str> {
    let is_num = |c: char| c.is_ascii_digit() || c == '.';
    let start = s.find(is_num)?;
    let rest = &s[start..];
    let end = rest.find(|c: char| !is_num(c)).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Contents between the first `[` and the following `]`.
pub(crate) fn bracketed(s: &str) -> Option<&str> {
    let open = s.find('[')?;
    let inner = &s[open + 1..];
    let close = inner.find(']')?;
    Some(&inner[..close])
}

/// Parses a comma separated list, skipping empty tokens.
///
/// Returns `None` as soon as one non-empty token fails to parse.
pub(crate) fn parse_list<T: std::str::FromStr>(s: &str) -> Option<Vec<T>> {
    s.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| t.parse().ok())
        .collect()
}

/// Integer value of a lexically all-digit field.
pub(crate) fn all_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_number_skips_leading_text() {
        assert_eq!(first_number(" 0.015000 seconds"), Some("0.015000"));
        assert_eq!(first_number("no digits"), None);
    }

    #[test]
    fn bracketed_takes_first_pair() {
        assert_eq!(bracketed("x: [1, 2] [3]"), Some("1, 2"));
        assert_eq!(bracketed("x: [1, 2"), None);
    }

    #[test]
    fn parse_list_skips_empty_and_rejects_garbage() {
        assert_eq!(parse_list::<f64>("0.5, ,1.5,"), Some(vec![0.5, 1.5]));
        assert_eq!(parse_list::<f64>("0.5, abc"), None);
        assert_eq!(parse_list::<f64>(""), Some(vec![]));
    }

    #[test]
    fn all_digits_is_strict() {
        assert_eq!(all_digits("1000"), Some(1000));
        assert_eq!(all_digits("-1"), None);
        assert_eq!(all_digits("1e3"), None);
        assert_eq!(all_digits(""), None);
        assert_eq!(all_digits("99999999999999999999999"), None);
    }

    #[test]
    fn leading_digits_after_whitespace() {
        assert_eq!(leading_digits("  512 bits"), "512");
        assert_eq!(leading_digits("abc"), "");
    }
}
