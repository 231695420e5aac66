//! Collection query sent to the data service.

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 50;

/// Filter, sort and pagination parameters for listing users.
///
/// `where_clause` and `sort_by` are opaque expressions in the data service's
/// query language and are forwarded without inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuery {
    pub page_size: i64,
    pub offset: i64,
    pub where_clause: Option<String>,
    pub sort_by: Option<String>,
}

impl Default for UserQuery {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            offset: 0,
            where_clause: None,
            sort_by: None,
        }
    }
}

impl UserQuery {
    pub fn new(page_size: i64, offset: i64) -> Self {
        Self {
            page_size,
            offset,
            ..Self::default()
        }
    }

    /// Sets the where clause. Empty strings are treated as absent.
    pub fn with_where(mut self, where_clause: Option<String>) -> Self {
        self.where_clause = where_clause.filter(|w| !w.is_empty());
        self
    }

    /// Sets the sort expression. Empty strings are treated as absent.
    pub fn with_sort_by(mut self, sort_by: Option<String>) -> Self {
        self.sort_by = sort_by.filter(|s| !s.is_empty());
        self
    }

    /// Default page with a `<field>='<value>'` where clause.
    pub fn exact_match(field: &str, value: &str) -> Self {
        Self::default().with_where(Some(exact_match_clause(field, value)))
    }

    /// Query-string pairs in forwarding order.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("pageSize", self.page_size.to_string()),
            ("offset", self.offset.to_string()),
        ];
        if let Some(where_clause) = &self.where_clause {
            pairs.push(("where", where_clause.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        pairs
    }
}

/// Builds an equality clause with the value quoted as a string literal.
///
/// Single quotes inside `value` are doubled so the value cannot terminate
/// the literal and inject further conditions.
pub fn exact_match_clause(field: &str, value: &str) -> String {
    format!("{}='{}'", field, value.replace('\'', "''"))
}
