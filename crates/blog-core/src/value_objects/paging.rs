//! Offset pagination shared by all list queries

use std::str::FromStr;

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub const fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Self::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Self::Desc)
        } else {
            Err(())
        }
    }
}

/// A normalized page window: 1-based page number and a bounded page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: u32,
    pub page_size: u32,
    pub direction: SortDirection,
}

impl PageRequest {
    /// Build a page request, clamping out-of-range values to the nearest valid one
    pub fn new(page_number: u32, page_size: u32, direction: SortDirection) -> Self {
        Self {
            page_number: page_number.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
            direction,
        }
    }

    /// SQL `OFFSET`
    #[inline]
    pub fn offset(&self) -> i64 {
        i64::from(self.page_number.saturating_sub(1)) * i64::from(self.page_size)
    }

    /// SQL `LIMIT`
    #[inline]
    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Number of pages needed for `total_count` items
    pub fn pages_count(&self, total_count: i64) -> i64 {
        let size = i64::from(self.page_size.max(1));
        (total_count.max(0) + size - 1) / size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE, SortDirection::Desc)
    }
}
