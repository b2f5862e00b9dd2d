//! Shared data models for the RS Finance Service backend

use serde::Serialize;

/// Paginated response
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub total: i64,
    pub page: i32,
    pub limit: i32,
}

/// Clamp raw pagination input to sane bounds and return (page, limit, offset).
pub fn page_bounds(page: Option<i32>, limit: Option<i32>) -> (i32, i32, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(20).clamp(1, 100);
    let offset = ((page - 1) * limit) as i64;
    (page, limit, offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_bounds_defaults() {
        assert_eq!(page_bounds(None, None), (1, 20, 0));
    }

    #[test]
    fn test_page_bounds_clamps() {
        assert_eq!(page_bounds(Some(0), Some(0)), (1, 1, 0));
        assert_eq!(page_bounds(Some(-3), Some(500)), (1, 100, 0));
        assert_eq!(page_bounds(Some(3), Some(25)), (3, 25, 50));
    }
}
