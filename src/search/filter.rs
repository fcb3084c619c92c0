// file: src/search/filter.rs
// description: date, owner and word predicates over selected rows
// reference: case-insensitive substring matching

use crate::config::ColumnLayout;
use crate::models::{Row, SearchCriteria};
use tracing::debug;

pub struct SearchFilter<'a> {
    layout: &'a ColumnLayout,
    date: &'a str,
    owner: String,
    words: Vec<String>,
}

impl<'a> SearchFilter<'a> {
    pub fn new(layout: &'a ColumnLayout, criteria: &'a SearchCriteria) -> Self {
        Self {
            layout,
            date: &criteria.date,
            owner: criteria.owner.to_lowercase(),
            words: criteria.word_tokens(),
        }
    }

    pub fn apply(&self, rows: Vec<Row>) -> Vec<Row> {
        let total = rows.len();
        let matched: Vec<Row> = rows.into_iter().filter(|row| self.matches(row)).collect();

        debug!("Search criteria matched {} of {} rows", matched.len(), total);
        matched
    }

    pub fn matches(&self, row: &Row) -> bool {
        self.date_matches(row) && self.owner_matches(row) && self.words_match(row)
    }

    fn date_matches(&self, row: &Row) -> bool {
        self.date.is_empty() || row.cell(self.layout.date) == self.date
    }

    fn owner_matches(&self, row: &Row) -> bool {
        self.owner.is_empty()
            || row
                .cell(self.layout.owner_full_name)
                .to_lowercase()
                .contains(&self.owner)
    }

    fn words_match(&self, row: &Row) -> bool {
        let haystack = format!(
            "{}{}",
            row.cell(self.layout.name),
            row.cell(self.layout.comments)
        )
        .to_lowercase();

        self.words.iter().all(|word| haystack.contains(word.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn registry_row(name: &str, date: &str, owner_full_name: &str, comments: &str) -> Row {
        let mut cells = vec![String::new(); 16];
        cells[0] = "Опубликован".to_string();
        cells[1] = name.to_string();
        cells[3] = date.to_string();
        cells[10] = owner_full_name.to_string();
        cells[12] = comments.to_string();
        Row::new(cells)
    }

    fn criteria(date: &str, owner: &str, words: &str) -> SearchCriteria {
        SearchCriteria {
            date: date.to_string(),
            owner: owner.to_string(),
            words: words.to_string(),
        }
    }

    fn names(rows: &[Row]) -> Vec<&str> {
        rows.iter().map(|row| row.cell(1)).collect()
    }

    fn fixtures() -> Vec<Row> {
        vec![
            registry_row("Gateway", "01.02.2023", "Ivanov Ivan", "BeTa Release notes"),
            registry_row("Ledger", "15.03.2023", "Petrova Anna", "stable build"),
            registry_row("Портал", "01.02.2023", "Сидоров Пётр", "Внутренний сервис"),
        ]
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let layout = ColumnLayout::default();
        let criteria = SearchCriteria::default();
        let filter = SearchFilter::new(&layout, &criteria);

        let matched = filter.apply(fixtures());
        assert_eq!(names(&matched), vec!["Gateway", "Ledger", "Портал"]);
    }

    #[test]
    fn test_words_are_case_insensitive() {
        let layout = ColumnLayout::default();
        let criteria = criteria("", "", "beta");
        let filter = SearchFilter::new(&layout, &criteria);

        assert_eq!(names(&filter.apply(fixtures())), vec!["Gateway"]);
    }

    #[test]
    fn test_words_are_conjunctive() {
        let layout = ColumnLayout::default();

        let both = criteria("", "", "gateway NOTES");
        let filter = SearchFilter::new(&layout, &both);
        assert_eq!(names(&filter.apply(fixtures())), vec!["Gateway"]);

        let one_missing = criteria("", "", "gateway stable");
        let filter = SearchFilter::new(&layout, &one_missing);
        assert!(filter.apply(fixtures()).is_empty());
    }

    #[test]
    fn test_words_match_cyrillic_case_insensitively() {
        let layout = ColumnLayout::default();
        let criteria = criteria("", "", "ПОРТАЛ сервис");
        let filter = SearchFilter::new(&layout, &criteria);

        assert_eq!(names(&filter.apply(fixtures())), vec!["Портал"]);
    }

    #[test]
    fn test_words_span_name_and_comments_boundary() {
        let layout = ColumnLayout::default();
        // name "Ledger" followed directly by comments "stable build"
        let criteria = criteria("", "", "ledgerstable");
        let filter = SearchFilter::new(&layout, &criteria);

        assert_eq!(names(&filter.apply(fixtures())), vec!["Ledger"]);
    }

    #[test]
    fn test_date_is_exact() {
        let layout = ColumnLayout::default();

        let exact = criteria("01.02.2023", "", "");
        let filter = SearchFilter::new(&layout, &exact);
        assert_eq!(names(&filter.apply(fixtures())), vec!["Gateway", "Портал"]);

        let partial = criteria("01.02", "", "");
        let filter = SearchFilter::new(&layout, &partial);
        assert!(filter.apply(fixtures()).is_empty());
    }

    #[test]
    fn test_owner_is_case_insensitive_substring() {
        let layout = ColumnLayout::default();
        let criteria = criteria("", "PETROVA", "");
        let filter = SearchFilter::new(&layout, &criteria);

        assert_eq!(names(&filter.apply(fixtures())), vec!["Ledger"]);
    }

    #[test]
    fn test_all_predicates_combine() {
        let layout = ColumnLayout::default();
        let criteria = criteria("01.02.2023", "сидоров", "сервис");
        let filter = SearchFilter::new(&layout, &criteria);

        assert_eq!(names(&filter.apply(fixtures())), vec!["Портал"]);
    }

    #[test]
    fn test_short_rows_do_not_panic() {
        let layout = ColumnLayout::default();
        let criteria = criteria("", "", "alpha");
        let filter = SearchFilter::new(&layout, &criteria);

        let short: Row = ["Опубликован", "Alpha"].into_iter().collect();
        assert!(filter.matches(&short));

        let owner = SearchCriteria {
            owner: "x".to_string(),
            ..Default::default()
        };
        let filter = SearchFilter::new(&layout, &owner);
        assert!(!filter.matches(&short));
    }
}
