//! Content blob parsing: title extraction and paywall marker handling.
//!
//! A blob is UTF-8 markup whose first heading element carries the post
//! title and whose body may contain a single reserved `<paywall/>` tag
//! marking the boundary between free and paid content. This module is the
//! only place that understands that structure; it does purely structural
//! text processing and knows nothing about payment state.
//!
//! # Key Types
//!
//! - [`SplitContent`] - A blob split into title and body
//! - [`split_title`] - Performs the split, failing on title-less blobs
//! - [`has_paywall_marker`] / [`locate_paywall_marker`] / [`strip_paywall_marker`] -
//!   Sentinel detection, location and removal

use regex::Regex;
use std::sync::LazyLock;

use crate::error::MalformedContentError;

/// First heading element of any level. The inner markup is capture group 2.
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<h([1-6])\b[^>]*>(.*?)</h[1-6]\s*>").expect("heading pattern is valid")
});

/// Any spelling of the paywall sentinel tag: `<paywall>`, `<paywall/>`,
/// `<paywall />`, `</paywall>`, with or without attributes.
static PAYWALL_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?paywall\b[^>]*>").expect("paywall pattern is valid"));

/// Any markup tag, for plain-text flattening.
static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));

/// A content blob split into its title and the remaining body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitContent {
    /// Inner text of the first heading element, whitespace-trimmed.
    pub title: String,
    /// The blob with the heading element removed and leading whitespace trimmed.
    pub body: String,
}

/// Splits a raw content blob into title and body.
///
/// The first heading element (`<h1>`..`<h6>`) supplies the title: its inner
/// text with nested tags flattened and surrounding whitespace trimmed. The
/// heading element is removed from the blob and the remainder, with leading
/// whitespace trimmed, becomes the body.
///
/// The split is purely structural and deterministic; payment state plays no
/// part here.
///
/// # Errors
///
/// Returns [`MalformedContentError`] if the blob contains no heading element.
pub fn split_title(blob: &str) -> Result<SplitContent, MalformedContentError> {
    let caps = HEADING.captures(blob).ok_or(MalformedContentError)?;
    let heading = caps.get(0).expect("whole match always present");
    let inner = caps.get(2).map_or("", |m| m.as_str());

    let mut body = String::with_capacity(blob.len() - heading.len());
    body.push_str(&blob[..heading.start()]);
    body.push_str(&blob[heading.end()..]);

    Ok(SplitContent {
        title: plain_text(inner),
        body: body.trim_start().to_owned(),
    })
}

/// Returns true iff the paywall sentinel occurs anywhere in the blob.
///
/// Exactly one occurrence is expected; with more than one, the first is
/// authoritative for truncation but presence is still reported.
#[must_use]
pub fn has_paywall_marker(blob: &str) -> bool {
    PAYWALL_TAG.is_match(blob)
}

/// Returns the byte offset of the first paywall sentinel, if any.
#[must_use]
pub fn locate_paywall_marker(body: &str) -> Option<usize> {
    PAYWALL_TAG.find(body).map(|m| m.start())
}

/// Removes every occurrence of the paywall sentinel, leaving surrounding
/// content untouched. Marker-free input passes through unchanged.
#[must_use]
pub fn strip_paywall_marker(html: &str) -> String {
    PAYWALL_TAG.replace_all(html, "").into_owned()
}

/// Flattens markup to plain text: tags removed, whitespace collapsed to
/// single spaces, surrounding whitespace trimmed.
#[must_use]
pub fn plain_text(html: &str) -> String {
    let text = ANY_TAG.replace_all(html, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
