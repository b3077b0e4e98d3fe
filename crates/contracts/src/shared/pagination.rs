//! Pagination request/response contracts shared by all listing endpoints

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Listing query, 1-indexed pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: usize,
    pub limit: usize,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageQuery {
    pub fn to_query_string(&self) -> String {
        format!("page={}&limit={}", self.page, self.limit)
    }
}

/// One page of results plus the overall total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: usize,
    pub page: usize,
    pub limit: usize,
}

impl<T> Paginated<T> {
    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let page = |total| Paginated::<i32> {
            items: vec![],
            total,
            page: 1,
            limit: 20,
        };
        assert_eq!(page(0).total_pages(), 0);
        assert_eq!(page(1).total_pages(), 1);
        assert_eq!(page(20).total_pages(), 1);
        assert_eq!(page(21).total_pages(), 2);
    }

    #[test]
    fn test_query_string() {
        let q = PageQuery { page: 3, limit: 50 };
        assert_eq!(q.to_query_string(), "page=3&limit=50");
    }
}
