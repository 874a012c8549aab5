//! The access decision: what content a caller sees.
//!
//! [`resolve_content`] is the public entry point the caller-facing layer
//! invokes after loading a post record and its content blob. It is a pure
//! function of the blob and two booleans; the decision is recomputed per
//! request and never cached, because truncation depends on the caller's
//! payment state.

use crate::error::MalformedContentError;
use crate::markup::{SplitContent, locate_paywall_marker, split_title, strip_paywall_marker};
use crate::preview::extract_free_content;

/// The content released to a caller for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContent {
    /// Title extracted from the blob's heading element.
    pub title: String,
    /// Marker-free HTML: the full body, or the free preview.
    pub html: String,
    /// Whether the preview path actually cut the body at a marker.
    pub truncated: bool,
}

/// Resolves the content a caller may see.
///
/// A paywalled post read without payment proof yields only the free
/// preview; every other combination yields the full body. On either path
/// the paywall sentinel is stripped unconditionally as the last step, so no
/// rendered output ever contains it regardless of the flag combination.
///
/// A post flagged paywalled whose blob carries no marker resolves to the
/// full body: the flag is a creation-time cache that can drift from the
/// blob, and tolerating the mismatch beats failing the request.
///
/// # Errors
///
/// Returns [`MalformedContentError`] if the blob has no title heading. The
/// error is propagated untouched; mapping it to a user-visible response is
/// the caller's concern.
#[cfg_attr(feature = "telemetry", tracing::instrument(skip(blob), err))]
pub fn resolve_content(
    blob: &str,
    has_paywall: bool,
    has_paid: bool,
) -> Result<ResolvedContent, MalformedContentError> {
    let SplitContent { title, body } = split_title(blob)?;

    let (html, truncated) = if has_paywall && !has_paid {
        let cut = locate_paywall_marker(&body).is_some();
        (extract_free_content(&body), cut)
    } else {
        // Full path: the preview extractor is never consulted, even if the
        // blob happens to contain a stray marker.
        (body, false)
    };

    #[cfg(feature = "telemetry")]
    tracing::debug!(has_paywall, has_paid, truncated, "resolved content");

    Ok(ResolvedContent {
        title,
        html: strip_paywall_marker(&html),
        truncated,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::has_paywall_marker;

    const BLOB: &str = "<h1>Hello</h1><p>free</p><paywall/><p>paid</p>";

    #[test]
    fn test_unpaid_caller_gets_preview_only() {
        let resolved = resolve_content(BLOB, true, false).unwrap();
        assert_eq!(resolved.title, "Hello");
        assert_eq!(resolved.html, "<p>free</p>");
        assert!(resolved.truncated);
    }

    #[test]
    fn test_paid_caller_gets_full_body_marker_free() {
        let resolved = resolve_content(BLOB, true, true).unwrap();
        assert_eq!(resolved.title, "Hello");
        assert_eq!(resolved.html, "<p>free</p><p>paid</p>");
        assert!(!resolved.truncated);
    }

    #[test]
    fn test_unpaywalled_post_shows_all_with_stray_marker_stripped() {
        for has_paid in [false, true] {
            let resolved = resolve_content(BLOB, false, has_paid).unwrap();
            assert_eq!(resolved.html, "<p>free</p><p>paid</p>");
            assert!(!resolved.truncated);
        }
    }

    #[test]
    fn test_paywalled_flag_without_marker_falls_back_to_full_body() {
        let blob = "<h1>T</h1><p>everything</p>";
        let resolved = resolve_content(blob, true, false).unwrap();
        assert_eq!(resolved.html, "<p>everything</p>");
        assert!(!resolved.truncated);
    }

    #[test]
    fn test_no_output_ever_contains_marker() {
        for (has_paywall, has_paid) in [(false, false), (false, true), (true, false), (true, true)]
        {
            let resolved = resolve_content(BLOB, has_paywall, has_paid).unwrap();
            assert!(!has_paywall_marker(&resolved.html));
        }
    }

    #[test]
    fn test_double_marker_previews_before_first_only() {
        let blob = "<h1>T</h1><p>a</p><paywall/><paywall/><p>b</p>";
        let resolved = resolve_content(blob, true, false).unwrap();
        assert_eq!(resolved.html, "<p>a</p>");
    }

    #[test]
    fn test_missing_heading_propagates_error() {
        assert_eq!(
            resolve_content("<p>headless</p>", true, false),
            Err(MalformedContentError)
        );
    }

    #[test]
    fn test_paid_result_matches_stripped_split_body() {
        let split = split_title(BLOB).unwrap();
        let resolved = resolve_content(BLOB, true, true).unwrap();
        assert_eq!(resolved.html, strip_paywall_marker(&split.body));
    }
}
