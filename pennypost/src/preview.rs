//! Free-content extraction and listing summaries.
//!
//! The preview is the portion of a body preceding the paywall sentinel. A
//! body without a sentinel is treated as fully free, which is also what
//! makes a stale `hasPaywall` flag harmless: resolution falls back to the
//! whole body instead of failing.

use crate::markup::{locate_paywall_marker, plain_text};

/// Character limit for the cached listing summary.
pub const SHORT_TEXT_MAX_CHARS: usize = 160;

/// Returns the free portion of a body.
///
/// With a sentinel present, this is the substring preceding its first
/// occurrence, trailing whitespace trimmed. Without one, the body is
/// returned unchanged. The output never contains the sentinel either way.
#[must_use]
pub fn extract_free_content(body: &str) -> String {
    locate_paywall_marker(body).map_or_else(
        || body.to_owned(),
        |at| body[..at].trim_end().to_owned(),
    )
}

/// Produces the plain-text summary cached on a post for listing views.
///
/// Only the free portion of the body contributes, so a listing can never
/// leak paid content. Tags are removed, whitespace collapsed, and the text
/// truncated to `max_chars` characters with a trailing ellipsis.
#[must_use]
pub fn short_text(body: &str, max_chars: usize) -> String {
    let text = plain_text(&extract_free_content(body));
    if text.chars().count() <= max_chars {
        return text;
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::has_paywall_marker;

    #[test]
    fn test_extract_free_content_cuts_at_marker() {
        let body = "<p>free</p><paywall/><p>paid</p>";
        assert_eq!(extract_free_content(body), "<p>free</p>");
    }

    #[test]
    fn test_extract_free_content_trims_trailing_whitespace() {
        let body = "<p>free</p>\n\n<paywall/><p>paid</p>";
        assert_eq!(extract_free_content(body), "<p>free</p>");
    }

    #[test]
    fn test_extract_free_content_identity_without_marker() {
        let body = "<p>all of it</p>";
        assert_eq!(extract_free_content(body), body);
    }

    #[test]
    fn test_extract_free_content_first_marker_wins() {
        let body = "<p>a</p><paywall/><p>b</p><paywall/><p>c</p>";
        assert_eq!(extract_free_content(body), "<p>a</p>");
    }

    #[test]
    fn test_extract_free_content_never_contains_marker() {
        for body in [
            "<p>a</p><paywall/><p>b</p>",
            "<paywall/><p>everything paid</p>",
            "<p>free only</p>",
        ] {
            assert!(!has_paywall_marker(&extract_free_content(body)));
        }
    }

    #[test]
    fn test_short_text_flattens_free_portion() {
        let body = "<p>one <em>two</em></p><paywall/><p>secret</p>";
        assert_eq!(short_text(body, SHORT_TEXT_MAX_CHARS), "one two");
    }

    #[test]
    fn test_short_text_truncates_with_ellipsis() {
        let body = "<p>abcdefghij</p>";
        assert_eq!(short_text(body, 4), "abcd…");
    }

    #[test]
    fn test_short_text_excludes_paid_content() {
        let body = "<p>free</p><paywall/><p>secret</p>";
        let short = short_text(body, SHORT_TEXT_MAX_CHARS);
        assert!(!short.contains("secret"));
    }
}
