#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Content core for paywalled publishing.
//!
//! This crate decides what a reader gets to see. A post's content is stored
//! as a single markup blob carrying an embedded title heading and, for paid
//! posts, an embedded paywall marker. Given that blob and the caller's
//! payment state, the crate resolves the title and the exact HTML to render,
//! releasing either the full body or only the free preview.
//!
//! Everything here is a pure, synchronous function of its inputs: no I/O, no
//! shared state, no caches. Storage, HTTP, authentication and payment
//! verification are collaborators that hand in plain values and receive
//! plain values back, so the crate is safe to call from any number of
//! concurrent request handlers.
//!
//! # Modules
//!
//! - [`markup`] - Content blob parsing: title extraction and paywall marker handling
//! - [`preview`] - Free-content extraction and listing summaries
//! - [`resolve`] - The access decision: what content a caller sees
//! - [`pagination`] - Listing page parameter validation
//! - [`post`] - Post wire types and creation-time metadata assembly
//! - [`error`] - Error types shared across the crate
//!
//! # Content blob contract
//!
//! The blob is UTF-8 markup with a fixed structure consumed from upstream
//! content storage: the first heading element (`<h1>`..`<h6>`) holds the
//! title, and at most one reserved `<paywall/>` tag separates the free
//! preview from the paid remainder. The marker is internal bookkeeping and
//! is never present in any rendered output.
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring

pub mod error;
pub mod markup;
pub mod pagination;
pub mod post;
pub mod preview;
pub mod resolve;

pub use resolve::{ResolvedContent, resolve_content};
