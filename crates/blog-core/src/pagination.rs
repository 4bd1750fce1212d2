//! Skip/limit pagination.
//!
//! A page request is turned into a window over the result set:
//! `skip = page_size * (page_number - 1)` and `limit = page_size`.
//! Page numbers are not validated here; zero or negative pages produce a
//! zero or negative skip, which the store decides how to handle.

use serde::{Deserialize, Serialize};

/// Page size used when the client does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Page coordinates as sent by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number.
    pub page_number: i64,
    /// Page size. `None` means "use the default"; an explicit `0` is kept.
    pub page_size: Option<i64>,
}

/// Window over a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub skip: i64,
    pub limit: i64,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: Option<i64>) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Effective page size after defaulting.
    #[must_use]
    pub fn effective_page_size(&self) -> i64 {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }

    /// Compute the skip/limit window for this page.
    ///
    /// Arithmetic saturates at the `i64` bounds.
    #[must_use]
    pub fn window(&self) -> Window {
        let limit = self.effective_page_size();
        let skip = limit.saturating_mul(self.page_number.saturating_sub(1));
        Window { skip, limit }
    }
}

impl Window {
    /// Window with no skip and no limit.
    pub const UNBOUNDED: Self = Self { skip: 0, limit: 0 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_page() {
        let window = PageRequest::new(1, Some(10)).window();
        assert_eq!(window, Window { skip: 0, limit: 10 });
    }

    #[test]
    fn test_window_formula() {
        for page_number in 1..=50 {
            for page_size in 1..=50 {
                let window = PageRequest::new(page_number, Some(page_size)).window();
                assert_eq!(window.skip, page_size * (page_number - 1));
                assert_eq!(window.limit, page_size);
            }
        }
    }

    #[test]
    fn test_absent_page_size_defaults() {
        let window = PageRequest::new(3, None).window();
        assert_eq!(window.limit, DEFAULT_PAGE_SIZE);
        assert_eq!(window.skip, 40);
    }

    #[test]
    fn test_zero_page_size_preserved() {
        let request = PageRequest::new(2, Some(0));
        assert_eq!(request.effective_page_size(), 0);
        assert_eq!(request.window(), Window { skip: 0, limit: 0 });
    }

    #[test]
    fn test_zero_page_number_gives_negative_skip() {
        let window = PageRequest::new(0, None).window();
        assert_eq!(window.skip, -20);
        assert_eq!(window.limit, 20);
    }

    #[test]
    fn test_negative_page_number() {
        let window = PageRequest::new(-1, Some(5)).window();
        assert_eq!(window.skip, -10);
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let window = PageRequest::new(i64::MAX, Some(i64::MAX)).window();
        assert_eq!(window.skip, i64::MAX);

        let window = PageRequest::new(i64::MIN, Some(2)).window();
        assert_eq!(window.skip, i64::MIN);
    }
}
