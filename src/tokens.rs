//! Pure classification of single argv tokens.
//!
//! A token is *option-shaped* when [`is_long_option`] or [`is_short_option`]
//! holds; everything else (including `-` and `--` alone) is positional.

/// Whether `token` is a long option: `--name` or `--name=value`.
pub fn is_long_option(token: &str) -> bool {
    token.len() > 2 && token.starts_with("--")
}

/// Whether `token` is a short option or switch cluster: `-a`, `-abc`,
/// `-aval`, `-a=val`.  `-` and `--` alone are not options.
pub fn is_short_option(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-') && !is_long_option(token) && token != "--"
}

/// The name of a long option: the substring after `--`, up to the first `=`
/// if present.  Must only be called on tokens satisfying [`is_long_option`].
pub fn long_option_name(token: &str) -> &str {
    let body = &token[2..];
    match body.find('=') {
        Some(equals) => &body[..equals],
        None => body,
    }
}

/// The cluster of a short option: the substring after the leading `-`.
/// Must only be called on tokens satisfying [`is_short_option`].
pub fn short_cluster(token: &str) -> &str {
    &token[1..]
}

/// Split a `name=value` token, yielding the name after the leading dashes
/// and the value after the first `=`.  `None` when there is no `=`.
pub fn split_name_equals(token: &str) -> Option<(&str, &str)> {
    let equals = token.find('=')?;
    Some((
        token[..equals].trim_start_matches('-'),
        &token[equals + 1..],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("--option", true)]
    #[case("--an-option", true)]
    #[case("--option=value", true)]
    #[case("option", false)]
    #[case("this-is--an-option", false)]
    #[case("-x", false)]
    #[case("-", false)]
    #[case("--", false)]
    fn long_option(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_long_option(token), expected);
    }

    #[rstest]
    #[case("-x", true)]
    #[case("-xyz", true)]
    #[case("-x=42", true)]
    #[case("-", false)]
    #[case("--", false)]
    #[case("--option", false)]
    #[case("option", false)]
    fn short_option(#[case] token: &str, #[case] expected: bool) {
        assert_eq!(is_short_option(token), expected);
    }

    #[rstest]
    #[case("--option", "option")]
    #[case("--option=value", "option")]
    #[case("--an-option=a=b", "an-option")]
    fn name_of_long(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(long_option_name(token), expected);
    }

    #[rstest]
    #[case("-x", "x")]
    #[case("-xyz", "xyz")]
    fn cluster_of_short(#[case] token: &str, #[case] expected: &str) {
        assert_eq!(short_cluster(token), expected);
    }

    #[rstest]
    #[case("--option=value", Some(("option", "value")))]
    #[case("-x=42", Some(("x", "42")))]
    #[case("-x=", Some(("x", "")))]
    #[case("--option", None)]
    #[case("-x", None)]
    #[case("plain", None)]
    fn name_equals_value(#[case] token: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(split_name_equals(token), expected);
    }
}
