// file: src/models/row.rs
// description: worksheet row as an ordered list of text cells
// reference: positional column access for the registry sheet

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: Vec<String>,
}

impl Row {
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Text of the cell at `index`, or `""` when the row is shorter.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }

    /// Cells from `start` to the end of the row; empty when `start` is past the end.
    pub fn tail(&self, start: usize) -> &[String] {
        self.cells.get(start..).unwrap_or(&[])
    }

    pub fn contains_exact(&self, value: &str) -> bool {
        self.cells.iter().any(|cell| cell == value)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_past_end_is_empty() {
        let row: Row = ["a", "b"].into_iter().collect();
        assert_eq!(row.cell(1), "b");
        assert_eq!(row.cell(7), "");
    }

    #[test]
    fn test_tail() {
        let row: Row = ["a", "b", "c"].into_iter().collect();
        assert_eq!(row.tail(1), &["b".to_string(), "c".to_string()]);
        assert!(row.tail(3).is_empty());
        assert!(row.tail(10).is_empty());
    }

    #[test]
    fn test_contains_exact() {
        let row: Row = ["Опубликован", "x"].into_iter().collect();
        assert!(row.contains_exact("Опубликован"));
        assert!(!row.contains_exact("Опубликован "));
        assert!(!row.contains_exact("опубликован"));
    }
}
