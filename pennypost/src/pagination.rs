//! Listing page parameter validation.
//!
//! The core validates and normalizes pagination input; executing the actual
//! query against a store is the caller's job. Pages are zero-based: the
//! first page is `page = 0`, and the resulting `offset` is the number of
//! records a store should skip.

use serde::{Deserialize, Serialize};

use crate::error::InvalidPaginationError;

/// Largest page size a listing query will accept.
pub const MAX_PAGE_SIZE: u32 = 12;

/// A validated, normalized pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Zero-based page index. Unbounded above.
    pub page: u32,
    /// Records per page, at most [`MAX_PAGE_SIZE`].
    pub page_size: u32,
    /// Records to skip: `page * page_size`, computed without overflow.
    pub offset: u64,
}

impl PageRequest {
    /// Validates page parameters and computes the store offset.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidPaginationError`] if `page_size` exceeds
    /// [`MAX_PAGE_SIZE`].
    pub fn normalize(page: u32, page_size: u32) -> Result<Self, InvalidPaginationError> {
        if page_size > MAX_PAGE_SIZE {
            return Err(InvalidPaginationError::new(page_size));
        }
        Ok(Self {
            page,
            page_size,
            offset: u64::from(page) * u64::from(page_size),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_accepts_cap() {
        let req = PageRequest::normalize(0, 12).unwrap();
        assert_eq!(req.page_size, 12);
        assert_eq!(req.offset, 0);
    }

    #[test]
    fn test_normalize_rejects_above_cap() {
        assert_eq!(
            PageRequest::normalize(0, 13),
            Err(InvalidPaginationError::new(13))
        );
    }

    #[test]
    fn test_normalize_computes_offset() {
        assert_eq!(PageRequest::normalize(2, 10).unwrap().offset, 20);
    }

    #[test]
    fn test_normalize_large_page_does_not_overflow() {
        let req = PageRequest::normalize(u32::MAX, 12).unwrap();
        assert_eq!(req.offset, u64::from(u32::MAX) * 12);
    }

    #[test]
    fn test_page_request_serializes_camel_case() {
        let req = PageRequest::normalize(1, 10).unwrap();
        let json = serde_json::to_value(req).unwrap();
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["offset"], 10);
    }
}
