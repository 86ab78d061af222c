//! Table output formatting

use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

/// Placeholder printed for an empty result set
pub const EMPTY_RESULTS: &str = "No results found.";

/// Format rows as a table, or [`EMPTY_RESULTS`] when there are none
pub fn format_table<T: Tabled>(data: &[T]) -> String {
    format_table_or(data, EMPTY_RESULTS)
}

/// Format rows as a table, or `empty` when there are none
pub fn format_table_or<T: Tabled>(data: &[T], empty: &str) -> String {
    if data.is_empty() {
        return empty.to_string();
    }

    let mut table = Table::new(data);
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Tabled)]
    struct Row {
        #[tabled(rename = "ID")]
        id: u32,
        #[tabled(rename = "NAME")]
        name: &'static str,
    }

    #[test]
    fn test_format_table_empty() {
        let rows: Vec<Row> = vec![];
        assert_eq!(format_table(&rows), EMPTY_RESULTS);
    }

    #[test]
    fn test_format_table_custom_empty() {
        let rows: Vec<Row> = vec![];
        assert_eq!(format_table_or(&rows, "Team is empty."), "Team is empty.");
    }

    #[test]
    fn test_format_table_rows() {
        let rows = vec![
            Row {
                id: 1,
                name: "bulbasaur",
            },
            Row {
                id: 151,
                name: "mew",
            },
        ];

        let result = format_table(&rows);

        assert!(result.contains("ID"));
        assert!(result.contains("NAME"));
        assert!(result.contains("bulbasaur"));
        assert!(result.contains("151"));
        // Rounded style corners
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
