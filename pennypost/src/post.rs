//! Post wire types and creation-time metadata assembly.
//!
//! The post record itself lives in storage; this module owns its wire shape
//! and the derivation of the fields that are computed once from the content
//! blob when a post is created. Cached fields (`title`, `short`,
//! `has_paywall`) are never re-derived afterwards.

use serde::{Deserialize, Serialize};

use crate::error::MalformedContentError;
use crate::markup::{SplitContent, has_paywall_marker, split_title};
use crate::preview::{SHORT_TEXT_MAX_CHARS, short_text};

/// Price charged for a post when the owner does not set one.
pub const DEFAULT_PRICE: &str = "0.01";

/// A published post as it travels over the wire.
///
/// Field names follow the camelCase convention of the upstream protocol.
/// `payment_address` is the owner's derived vault address, computed once at
/// creation and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque record id.
    pub id: String,
    /// Id of the owning user.
    pub owner_id: String,
    /// Optional cover image reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    /// Reference to the raw content blob.
    pub content_id: String,
    /// Title cached from the blob at creation time.
    pub title: String,
    /// Listing summary cached from the blob at creation time.
    pub short: String,
    /// Unique human-readable identifier.
    pub slug: String,
    /// Price a reader pays for full access.
    pub price: String,
    /// Deterministic payment destination derived from the owner's key.
    pub payment_address: String,
    /// Whether the blob carried a paywall marker at creation time.
    pub has_paywall: bool,
    /// Creation timestamp, RFC 3339.
    pub created_at: String,
}

/// The computed portion of a new post.
///
/// Assembled from a freshly submitted content blob before the record is
/// handed to storage. Slug generation, image extraction and the storage
/// write itself belong to outside collaborators; they receive this draft
/// and fill in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDraft {
    /// Id of the owning user.
    pub owner_id: String,
    /// Title extracted from the blob.
    pub title: String,
    /// Marker-free, tag-free listing summary.
    pub short: String,
    /// Price a reader pays, [`DEFAULT_PRICE`] unless overridden.
    pub price: String,
    /// Derived vault address payments must be sent to.
    pub payment_address: String,
    /// Whether the blob contains a paywall marker.
    pub has_paywall: bool,
}

impl PostDraft {
    /// Computes the creation-time fields of a post from its content blob.
    ///
    /// `payment_address` is the owner's derived vault address, supplied by
    /// the address deriver at the call site so this crate stays free of
    /// chain dependencies.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedContentError`] if the blob has no title heading.
    pub fn from_content(
        blob: &str,
        owner_id: impl Into<String>,
        payment_address: impl Into<String>,
        price: Option<&str>,
    ) -> Result<Self, MalformedContentError> {
        let SplitContent { title, body } = split_title(blob)?;
        Ok(Self {
            owner_id: owner_id.into(),
            title,
            short: short_text(&body, SHORT_TEXT_MAX_CHARS),
            price: price.unwrap_or(DEFAULT_PRICE).to_owned(),
            payment_address: payment_address.into(),
            has_paywall: has_paywall_marker(blob),
        })
    }
}
