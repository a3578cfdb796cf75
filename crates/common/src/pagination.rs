//! Offset pagination shared by every list endpoint.
//!
//! `skip`/`limit` map onto SQL `OFFSET`/`LIMIT`; no upper bound is applied to `limit`.
//! Values past `i64::MAX` are bound as `i64::MAX`, which already exceeds any table.

use serde::Deserialize;

pub const DEFAULT_LIMIT: u64 = 100;

/// Largest value the SQL drivers bind for `OFFSET`/`LIMIT`.
pub const MAX_BOUND: u64 = i64::MAX as u64;

/// Pagination parameters, deserialized from `?skip=&limit=`.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    /// rows to skip, in insertion order
    pub skip: u64,
    /// maximum rows returned
    pub limit: u64,
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    pub fn sql_offset(&self) -> u64 { self.skip.min(MAX_BOUND) }

    pub fn sql_limit(&self) -> u64 { self.limit.min(MAX_BOUND) }
}

#[cfg(test)]
mod tests {
    use super::{Pagination, MAX_BOUND};

    #[test]
    fn default_values() {
        let d = Pagination::default();
        assert_eq!(d.skip, 0);
        assert_eq!(d.limit, 100);
    }

    #[test]
    fn large_limit_is_not_clamped() {
        let p = Pagination::new(3, 10_000);
        assert_eq!(p, Pagination { skip: 3, limit: 10_000 });
    }

    #[test]
    fn bounds_past_i64_are_capped_for_sql() {
        let p = Pagination::new(u64::MAX, u64::MAX);
        assert_eq!(p.sql_offset(), MAX_BOUND);
        assert_eq!(p.sql_limit(), i64::MAX as u64);
        assert_eq!(Pagination::new(4, 2).sql_offset(), 4);
        assert_eq!(Pagination::new(4, 2).sql_limit(), 2);
    }
}
