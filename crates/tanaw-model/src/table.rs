//! Untyped tables as read from a source spreadsheet.

/// Rows of untyped cells with no header assigned yet.
///
/// Row indices match the physical rows of the source file, blank rows
/// included, so header positions can be reported back to the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// Builds a table from string slices, mostly useful in tests.
    pub fn from_rows<R, C>(rows: R) -> Self
    where
        R: IntoIterator<Item = C>,
        C: IntoIterator,
        C::Item: AsRef<str>,
    {
        Self {
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(|cell| cell.as_ref().to_string()).collect())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, idx: usize) -> Option<&[String]> {
        self.rows.get(idx).map(Vec::as_slice)
    }

    /// Widest row in the table.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Rows after `idx`, exclusive.
    pub fn rows_after(&self, idx: usize) -> &[Vec<String>] {
        self.rows.get(idx + 1..).unwrap_or(&[])
    }
}

/// Returns true when every cell in the row is blank.
pub fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_keep_their_width() {
        let table = RawTable::from_rows([vec!["a", "b"], vec!["c"]]);
        assert_eq!(table.row(1), Some(&["c".to_string()][..]));
        assert_eq!(table.row(5), None);
        assert_eq!(table.width(), 2);
    }

    #[test]
    fn rows_after_last_row_is_empty() {
        let table = RawTable::from_rows([vec!["a"], vec!["b"]]);
        assert_eq!(table.rows_after(0).len(), 1);
        assert!(table.rows_after(1).is_empty());
        assert!(table.rows_after(7).is_empty());
    }

    #[test]
    fn blank_row_detection() {
        assert!(is_blank_row(&["".to_string(), "  ".to_string()]));
        assert!(!is_blank_row(&["".to_string(), "x".to_string()]));
    }
}
