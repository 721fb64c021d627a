//! Required column resolution.

use sift_ingest::NormalizationMap;
use sift_model::HeaderSet;

use crate::error::{Result, SiftError};

/// Accepted spellings of the status column, in priority order.
pub const STATUS_ALIASES: [&str; 2] = ["status", "order status"];

/// Accepted spellings of the order date column, in priority order.
pub const ORDER_DATE_ALIASES: [&str; 3] = ["order date", "date", "order_date"];

/// A required column found in the header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Header exactly as it appears in the file.
    pub header: String,
    /// Position of that header in the row.
    pub index: usize,
}

/// Where the status and order date values live in each record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResolution {
    pub status: ResolvedColumn,
    pub order_date: ResolvedColumn,
}

impl FieldResolution {
    /// Resolve both required columns, failing with every missing one named.
    pub fn resolve(headers: &HeaderSet, location: &str) -> Result<Self> {
        let lookup = NormalizationMap::from_headers(headers);
        let status = find_column(&lookup, headers, &STATUS_ALIASES);
        let order_date = find_column(&lookup, headers, &ORDER_DATE_ALIASES);

        match (status, order_date) {
            (Some(status), Some(order_date)) => Ok(Self { status, order_date }),
            (status, order_date) => {
                let mut missing = Vec::new();
                if status.is_none() {
                    missing.push(STATUS_ALIASES[0].to_string());
                }
                if order_date.is_none() {
                    missing.push(ORDER_DATE_ALIASES[0].to_string());
                }
                Err(SiftError::MissingColumns {
                    location: location.to_string(),
                    missing,
                    found: headers.iter().map(str::to_string).collect(),
                })
            }
        }
    }
}

fn find_column(
    lookup: &NormalizationMap,
    headers: &HeaderSet,
    aliases: &[&str],
) -> Option<ResolvedColumn> {
    let header = lookup.resolve(aliases)?;
    let index = headers.position(header)?;
    Some(ResolvedColumn {
        header: header.to_string(),
        index,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> HeaderSet {
        HeaderSet::new(names.iter().map(|name| (*name).to_string()).collect())
    }

    #[test]
    fn resolves_respelled_headers() {
        let set = headers(&["Order ID", " Order_Status ", "ORDERDATE", "Amount"]);
        let fields = FieldResolution::resolve(&set, "a.csv").unwrap();
        assert_eq!(fields.status.header, " Order_Status ");
        assert_eq!(fields.status.index, 1);
        assert_eq!(fields.order_date.header, "ORDERDATE");
        assert_eq!(fields.order_date.index, 2);
    }

    #[test]
    fn alias_priority_prefers_earlier_alias() {
        let set = headers(&["Date", "Status", "Order Date"]);
        let fields = FieldResolution::resolve(&set, "a.csv").unwrap();
        assert_eq!(fields.order_date.header, "Order Date");
        assert_eq!(fields.order_date.index, 2);
    }

    #[test]
    fn first_spelling_wins_for_colliding_headers() {
        let set = headers(&["status", "STATUS", "date"]);
        let fields = FieldResolution::resolve(&set, "a.csv").unwrap();
        assert_eq!(fields.status.index, 0);
    }

    #[test]
    fn reports_every_missing_column() {
        let set = headers(&["id", "amount"]);
        let err = FieldResolution::resolve(&set, "raw/a.csv").unwrap_err();
        match err {
            SiftError::MissingColumns {
                location,
                missing,
                found,
            } => {
                assert_eq!(location, "raw/a.csv");
                assert_eq!(missing, vec!["status", "order date"]);
                assert_eq!(found, vec!["id", "amount"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reports_single_missing_column() {
        let set = headers(&["Status", "when"]);
        let err = FieldResolution::resolve(&set, "a.csv").unwrap_err();
        assert!(matches!(
            err,
            SiftError::MissingColumns { ref missing, .. } if missing == &vec!["order date".to_string()]
        ));
    }
}
