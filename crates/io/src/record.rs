//! Untyped input table and the two-field record schema.

/// Header of the period label column.
pub const PERIOD_COLUMN: &str = "Time period";

/// Header of the subscriber count column.
pub const SUBSCRIBERS_COLUMN: &str = "Subscribers";

/// One input row projected onto the two required fields.
///
/// Both fields keep the original text so that validation failures can quote
/// exactly what the user supplied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Period label, e.g. `Q1 2019` or `03/31/2019`.
    pub period_label: String,
    /// Subscriber count as written in the file.
    pub subscriber_count: String,
}

/// Positions of the required columns within a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    /// Index of the period label column.
    pub period: usize,
    /// Index of the subscriber count column.
    pub subscribers: usize,
}

/// A header row plus data rows, exactly as read from the source.
///
/// Rows may be shorter or longer than the header; missing trailing fields
/// read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table from a header row and data rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Creates a two-column table with the standard headers.
    ///
    /// # Example
    ///
    /// ```
    /// use quartercast_io::RawTable;
    ///
    /// let table = RawTable::from_pairs(&[("Q1 2019", "1000"), ("Q2 2019", "1100")]);
    /// assert_eq!(table.len(), 2);
    /// ```
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            headers: vec![PERIOD_COLUMN.to_string(), SUBSCRIBERS_COLUMN.to_string()],
            rows: pairs
                .iter()
                .map(|(period, count)| vec![period.to_string(), count.to_string()])
                .collect(),
        }
    }

    /// Returns the header names as supplied.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Projects every row onto the required fields located by `columns`.
    pub fn records(&self, columns: ColumnIndex) -> Vec<RawRecord> {
        self.rows
            .iter()
            .map(|row| RawRecord {
                period_label: field(row, columns.period),
                subscriber_count: field(row, columns.subscribers),
            })
            .collect()
    }
}

fn field(row: &[String], idx: usize) -> String {
    row.get(idx).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_uses_standard_headers() {
        let table = RawTable::from_pairs(&[("Q1 2019", "1000")]);
        assert_eq!(table.headers(), &["Time period", "Subscribers"]);
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }

    #[test]
    fn records_follow_column_index() {
        let table = RawTable::new(
            vec!["Subscribers".into(), "Region".into(), "Time period".into()],
            vec![vec!["500".into(), "EU".into(), "Q3 2020".into()]],
        );
        let records = table.records(ColumnIndex {
            period: 2,
            subscribers: 0,
        });
        assert_eq!(
            records,
            vec![RawRecord {
                period_label: "Q3 2020".into(),
                subscriber_count: "500".into(),
            }]
        );
    }

    #[test]
    fn short_rows_read_as_empty() {
        let table = RawTable::new(
            vec!["Time period".into(), "Subscribers".into()],
            vec![vec!["Q1 2020".into()]],
        );
        let records = table.records(ColumnIndex {
            period: 0,
            subscribers: 1,
        });
        assert_eq!(records[0].subscriber_count, "");
    }

    #[test]
    fn default_is_empty() {
        let table = RawTable::default();
        assert!(table.is_empty());
        assert!(table.headers().is_empty());
    }
}
