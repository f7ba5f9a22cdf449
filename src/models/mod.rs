pub mod products;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_INDEX: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 50;

/// `?pageIndex=&pageSize=` query. Signed so that zero and negative values bind
/// and are clamped instead of being rejected.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// 1-based page number (default 1).
    pub page_index: Option<i64>,
    /// Items per page (default 10, at most 50).
    pub page_size: Option<i64>,
}

impl PaginationQuery {
    pub fn page_index(&self) -> u64 {
        match self.page_index {
            Some(index) if index >= 1 => index as u64,
            Some(_) => 1,
            None => DEFAULT_PAGE_INDEX,
        }
    }

    pub fn page_size(&self) -> u64 {
        match self.page_size {
            Some(size) => size.clamp(1, MAX_PAGE_SIZE as i64) as u64,
            None => DEFAULT_PAGE_SIZE,
        }
    }
}

/// A page of results together with the size of the whole collection.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination<T> {
    pub page_index: u64,
    pub page_size: u64,
    pub count: u64,
    pub data: Vec<T>,
}

impl<T> Pagination<T> {
    pub fn new(page_index: u64, page_size: u64, count: u64, data: Vec<T>) -> Self {
        Self {
            page_index,
            page_size,
            count,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page_index: Option<i64>, page_size: Option<i64>) -> PaginationQuery {
        PaginationQuery {
            page_index,
            page_size,
        }
    }

    #[test]
    fn defaults() {
        let q = query(None, None);
        assert_eq!(q.page_index(), 1);
        assert_eq!(q.page_size(), 10);
    }

    #[test]
    fn non_positive_values_are_raised_to_one() {
        let q = query(Some(0), Some(-3));
        assert_eq!(q.page_index(), 1);
        assert_eq!(q.page_size(), 1);

        assert_eq!(query(Some(i64::MIN), None).page_index(), 1);
    }

    #[test]
    fn page_size_is_capped() {
        assert_eq!(query(None, Some(1000)).page_size(), MAX_PAGE_SIZE);
        assert_eq!(query(None, Some(50)).page_size(), 50);
        assert_eq!(query(Some(7), Some(25)).page_index(), 7);
    }

    #[test]
    fn query_uses_camel_case_names() {
        let q: PaginationQuery = serde_json::from_value(serde_json::json!({
            "pageIndex": 3,
            "pageSize": 20,
        }))
        .unwrap();
        assert_eq!(q.page_index(), 3);
        assert_eq!(q.page_size(), 20);
    }
}
