//! Pagination types for list endpoints.

use serde::Serialize;

use crate::config::MAX_PAGE_SIZE;
use crate::errors::{AppError, AppResult};

/// Validated page request (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationParams {
    page: u64,
    per_page: u64,
    offset: u64,
}

impl PaginationParams {
    /// `page` must be at least 1, `per_page` between 1 and `MAX_PAGE_SIZE`,
    /// and the rows skipped before the page must fit a signed 64-bit offset.
    pub fn new(page: u64, per_page: u64) -> AppResult<Self> {
        if page == 0 {
            return Err(AppError::validation("page must be at least 1"));
        }
        if per_page == 0 {
            return Err(AppError::validation("per_page must be at least 1"));
        }
        if per_page > MAX_PAGE_SIZE {
            return Err(AppError::validation(format!(
                "per_page must be at most {}",
                MAX_PAGE_SIZE
            )));
        }

        let offset = (page - 1)
            .checked_mul(per_page)
            .filter(|offset| i64::try_from(*offset).is_ok())
            .ok_or_else(|| AppError::validation("page is out of range"))?;

        Ok(Self {
            page,
            per_page,
            offset,
        })
    }

    /// Rows to skip before this page
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Rows on this page
    pub fn limit(&self) -> u64 {
        self.per_page
    }
}

/// One page of results plus the totals needed to walk the rest
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(items: Vec<T>, params: PaginationParams, total_count: u64) -> Self {
        Self {
            items,
            total_count,
            page: params.page,
            per_page: params.per_page,
            total_pages: total_count.div_ceil(params.per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PaginationParams::new(1, 10).unwrap().offset(), 0);
        assert_eq!(PaginationParams::new(3, 10).unwrap().offset(), 20);
    }

    #[test]
    fn test_page_size_capped() {
        assert!(PaginationParams::new(1, MAX_PAGE_SIZE).is_ok());
        assert!(matches!(
            PaginationParams::new(1, MAX_PAGE_SIZE + 1),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            PaginationParams::new(1, u64::MAX),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_offset_beyond_signed_range_rejected() {
        // (page - 1) * per_page overflows u64
        assert!(matches!(
            PaginationParams::new(u64::MAX, 2),
            Err(AppError::Validation(_))
        ));
        // fits u64 but not i64
        assert!(matches!(
            PaginationParams::new(4_611_686_018_427_387_905, 2),
            Err(AppError::Validation(_))
        ));

        let last = PaginationParams::new(i64::MAX as u64 / 2 + 1, 2).unwrap();
        assert_eq!(last.offset(), i64::MAX as u64 - 1);
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(matches!(
            PaginationParams::new(0, 10),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            PaginationParams::new(1, 0),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let params = PaginationParams::new(1, 10).unwrap();
        assert_eq!(Paginated::<u8>::new(vec![], params, 0).total_pages, 0);
        assert_eq!(Paginated::<u8>::new(vec![], params, 10).total_pages, 1);
        assert_eq!(Paginated::<u8>::new(vec![], params, 11).total_pages, 2);
        assert_eq!(Paginated::<u8>::new(vec![], params, 25).total_pages, 3);
    }
}
