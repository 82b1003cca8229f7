//! Response decoding, result sets and pagination bounds.

use serde_json::Value;
use tracing::warn;

use crate::record::TransactionRecord;

/// Decoded body of a sales response.
///
/// Decoding never fails on shape: a missing or non-array `data` yields no
/// rows and a missing or non-integer `total` yields zero.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SalesPage {
    /// Rows of the requested page, in server order.
    pub data: Vec<TransactionRecord>,
    /// Number of rows matching the query across all pages.
    pub total: u64,
}

impl SalesPage {
    /// Creates a page from rows and a total.
    pub fn new(data: Vec<TransactionRecord>, total: u64) -> Self {
        Self { data, total }
    }

    /// Decodes a response body.
    ///
    /// An empty body is an empty page. Only bytes that are not JSON at all
    /// are reported as an error.
    pub fn from_json_slice(body: &[u8]) -> serde_json::Result<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        let value: Value = serde_json::from_slice(body)?;
        Ok(Self::from_json_value(value))
    }

    /// Extracts `data` and `total` from an already parsed body.
    pub fn from_json_value(value: Value) -> Self {
        let Value::Object(mut body) = value else {
            warn!("sales response is not a JSON object; treating as empty");
            return Self::default();
        };

        let data = match body.remove("data") {
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .filter_map(|(index, item)| {
                    match serde_json::from_value::<TransactionRecord>(item) {
                        Ok(record) => Some(record),
                        Err(error) => {
                            warn!(index, %error, "skipping undecodable sales row");
                            None
                        }
                    }
                })
                .collect(),
            Some(Value::Null) | None => Vec::new(),
            Some(_) => {
                warn!("sales response `data` is not an array; treating as empty");
                Vec::new()
            }
        };

        let total = body.get("total").and_then(Value::as_u64).unwrap_or(0);

        Self { data, total }
    }
}

/// The last successful (or failed-and-cleared) result shown in the table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    /// Rows to display.
    pub rows: Vec<TransactionRecord>,
    /// Total matches reported by the server.
    pub total: u64,
}

impl ResultSet {
    /// An empty result with a zero total.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true when there are no rows to show.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl From<SalesPage> for ResultSet {
    fn from(page: SalesPage) -> Self {
        Self {
            rows: page.data,
            total: page.total,
        }
    }
}

/// Page bounds for the pagination footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current 1-based page.
    pub page: u32,
    /// Page size.
    pub limit: u32,
    /// Total matching rows.
    pub total: u64,
}

impl Pagination {
    /// Creates pagination bounds.
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self { page, limit, total }
    }

    /// Number of pages; at least one even when nothing matched.
    pub fn total_pages(&self) -> u64 {
        let limit = u64::from(self.limit.max(1));
        self.total.div_ceil(limit).max(1)
    }

    /// 1-based inclusive row numbers covered by the current page, or `None`
    /// when the page lies past the last match.
    pub fn row_range(&self) -> Option<(u64, u64)> {
        let limit = u64::from(self.limit.max(1));
        let start = u64::from(self.page.saturating_sub(1)) * limit + 1;
        if start > self.total {
            return None;
        }
        Some((start, (start + limit - 1).min(self.total)))
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a later page exists.
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.total_pages()
    }

    /// Footer text, e.g. `Page 1 of 5`.
    pub fn label(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn total_pages_rounds_up_with_floor_of_one() {
        assert_eq!(Pagination::new(1, 50, 120).total_pages(), 3);
        assert_eq!(Pagination::new(1, 50, 0).total_pages(), 1);
        assert_eq!(Pagination::new(1, 50, 100).total_pages(), 2);
    }

    #[test]
    fn row_range_and_label() {
        let first = Pagination::new(1, 50, 237);
        assert_eq!(first.row_range(), Some((1, 50)));
        assert_eq!(first.label(), "Page 1 of 5");
        assert!(!first.has_previous());
        assert!(first.has_next());

        let last = Pagination::new(5, 50, 237);
        assert_eq!(last.row_range(), Some((201, 237)));
        assert!(!last.has_next());

        let beyond = Pagination::new(9, 50, 237);
        assert_eq!(beyond.row_range(), None);
        assert_eq!(beyond.label(), "Page 9 of 5");
    }

    #[test]
    fn decodes_missing_fields_as_empty() {
        let page = SalesPage::from_json_value(json!({}));
        assert_eq!(page, SalesPage::default());

        let page = SalesPage::from_json_value(json!({ "data": "nope", "total": "12" }));
        assert!(page.data.is_empty());
        assert_eq!(page.total, 0);

        let page = SalesPage::from_json_value(json!([1, 2, 3]));
        assert_eq!(page, SalesPage::default());
    }

    #[test]
    fn skips_rows_that_are_not_objects() {
        let page = SalesPage::from_json_value(json!({
            "data": [{ "customer_name": "Asha" }, 42, { "customer_name": "Ravi" }],
            "total": 3
        }));
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 3);
    }

    #[test]
    fn empty_body_is_empty_page_but_garbage_is_an_error() {
        assert_eq!(SalesPage::from_json_slice(b"  ").unwrap(), SalesPage::default());
        assert!(SalesPage::from_json_slice(b"<html>").is_err());
    }
}
