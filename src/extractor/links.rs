// file: src/extractor/links.rs
// description: hyperlink cell extraction from the variable tail of a row

/// Cells that contain `marker`, in order of appearance.
pub fn extract_links(cells: &[String], marker: &str) -> Vec<String> {
    cells
        .iter()
        .filter(|cell| cell.contains(marker))
        .cloned()
        .collect()
}
