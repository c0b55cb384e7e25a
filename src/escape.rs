//! HTML and URL escaping

use std::borrow::Cow;

/// Escape the five HTML-significant characters.
pub fn html_escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['"', '\'', '&', '<', '>']) {
        return Cow::Borrowed(s);
    }
    let mut out = String::with_capacity(s.len() + 8);
    for c in s.chars() {
        match c {
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Escape for `application/x-www-form-urlencoded` values.
///
/// Alphanumerics and `-_.*` pass through, space becomes `+`, everything else
/// is percent-encoded as uppercase UTF-8 bytes.
pub fn url_form_parameter_escape(s: &str) -> String {
    urlencoding::encode(s)
        .replace("%20", "+")
        .replace("%2A", "*")
        .replace('~', "%7E")
}

/// Percent-encode everything outside the unreserved set; space stays `%20`.
pub fn url_path_segment_escape(s: &str) -> String {
    urlencoding::encode(s).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_plain_text_when_html_escape_then_borrowed() {
        assert!(matches!(html_escape("plain"), Cow::Borrowed("plain")));
    }

    #[test]
    fn given_space_when_escaping_then_form_and_path_differ() {
        assert_eq!(url_form_parameter_escape("a b"), "a+b");
        assert_eq!(url_path_segment_escape("a b"), "a%20b");
    }
}
