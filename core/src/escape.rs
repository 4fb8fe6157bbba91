//! Escaping for the three contexts markup ends up in: element bodies,
//! double-quoted attribute values and URLs.

use alloc::string::String;

/// URL schemes that survive [`url`]. Anything else is dropped.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto", "tel", "ftp", "ftps", "sms"];

/// Escapes text for placement inside an element body.
#[must_use]
pub fn html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_html(&mut out, text);
    out
}

/// Escapes text for placement inside a double-quoted attribute value.
#[must_use]
pub fn attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    push_attr(&mut out, text);
    out
}

/// Appends `text` to `out`, escaped for an element body.
pub fn push_html(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
}

/// Appends `text` to `out`, escaped for a double-quoted attribute value.
pub fn push_attr(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            // Newlines and tabs inside attributes are legal but get normalized
            // by browsers; keep them visible to the reader.
            '\n' => out.push_str("&#10;"),
            '\t' => out.push_str("&#9;"),
            _ => out.push(ch),
        }
    }
}

/// Sanitizes a URL for use in `href`/`src`.
///
/// Relative URLs, fragments and URLs whose scheme is in [`ALLOWED_SCHEMES`]
/// pass through with spaces percent-encoded and control characters removed.
/// Any other scheme (`javascript:`, `data:`, ...) yields an empty string.
/// The result still needs attribute escaping, which the renderer does.
#[must_use]
pub fn url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let mut cleaned = String::with_capacity(trimmed.len());
    for ch in trimmed.chars().filter(|ch| !ch.is_control()) {
        match ch {
            ' ' => cleaned.push_str("%20"),
            '<' => cleaned.push_str("%3C"),
            '>' => cleaned.push_str("%3E"),
            '"' => cleaned.push_str("%22"),
            _ => cleaned.push(ch),
        }
    }

    match scheme_of(&cleaned) {
        Some(scheme)
            if !ALLOWED_SCHEMES
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(scheme)) =>
        {
            tracing::debug!(scheme, "dropping URL with disallowed scheme");
            String::new()
        }
        _ => cleaned,
    }
}

/// Returns the scheme of `url` if the first `:` comes before any of `/?#`.
fn scheme_of(url: &str) -> Option<&str> {
    let colon = url.find(':')?;
    let boundary = url.find(['/', '?', '#']).unwrap_or(url.len());
    (colon < boundary && colon > 0).then(|| &url[..colon])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            html(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#039;Jerry&#039;&lt;/b&gt;"
        );
    }

    #[test]
    fn attribute_escaping_keeps_line_breaks_visible() {
        assert_eq!(attr("a\nb\"c"), "a&#10;b&quot;c");
    }

    #[test]
    fn url_keeps_allowed_schemes_and_relative_paths() {
        assert_eq!(url("https://example.com/a b"), "https://example.com/a%20b");
        assert_eq!(url("/wp-admin/admin.php?page=x"), "/wp-admin/admin.php?page=x");
        assert_eq!(url("#section"), "#section");
        assert_eq!(url("MAILTO:someone@example.com"), "MAILTO:someone@example.com");
    }

    #[test]
    fn url_drops_script_schemes() {
        assert_eq!(url("javascript:alert(1)"), "");
        assert_eq!(url("  JavaScript:alert(1)"), "");
        assert_eq!(url("data:text/html;base64,AAAA"), "");
    }

    #[test]
    fn colon_after_path_is_not_a_scheme() {
        assert_eq!(url("admin.php?time=10:30"), "admin.php?time=10:30");
    }
}
