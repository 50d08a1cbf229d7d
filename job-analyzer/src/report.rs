//! Tabular salary report, rendered as a bordered text table

use std::fmt::{self, Display};

use crate::stats::LanguageStats;

pub const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Shown in place of an average when no vacancy had an estimable salary
pub const NO_DATA: &str = "n/a";

/// Rows of the report: the fixed header followed by one row per language,
/// in the order given.
pub fn table_data(stats: &[(String, LanguageStats)]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(stats.len() + 1);
    rows.push(HEADER.iter().map(|cell| cell.to_string()).collect());
    for (language, stats) in stats {
        rows.push(vec![
            language.to_owned(),
            stats.vacancies_found.to_string(),
            stats.vacancies_processed.to_string(),
            stats
                .average_salary
                .map_or_else(|| NO_DATA.to_owned(), |salary| salary.to_string()),
        ]);
    }
    rows
}

/// Table with `+`/`-`/`|` borders, the title is set into the top border
/// when it fits. The first row is treated as the heading.
#[derive(Debug, Clone)]
pub struct AsciiTable {
    title: String,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    pub fn new(rows: Vec<Vec<String>>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows,
        }
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|column| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(column))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn border(widths: &[usize], title: &str) -> String {
        let segments = widths
            .iter()
            .map(|width| "-".repeat(width + 2))
            .collect::<Vec<_>>()
            .join("+");
        let line = format!("+{}+", segments);
        let title_width = title.chars().count();
        if title_width == 0 || title_width > line.chars().count() - 2 {
            return line;
        }
        let rest = line.chars().skip(1 + title_width).collect::<String>();
        format!("+{}{}", title, rest)
    }

    fn row(widths: &[usize], row: &[String]) -> String {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(column, &width)| {
                let cell = row.get(column).map(String::as_str).unwrap_or("");
                format!(" {:<width$} ", cell, width = width)
            })
            .collect::<Vec<_>>()
            .join("|");
        format!("|{}|", cells)
    }
}

impl Display for AsciiTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.column_widths();
        let separator = Self::border(&widths, "");
        writeln!(f, "{}", Self::border(&widths, &self.title))?;
        for (index, row) in self.rows.iter().enumerate() {
            writeln!(f, "{}", Self::row(&widths, row))?;
            if index == 0 && self.rows.len() > 1 {
                writeln!(f, "{}", separator)?;
            }
        }
        write!(f, "{}", separator)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn strings(row: &[&str]) -> Vec<String> {
        row.iter().map(|cell| cell.to_string()).collect()
    }

    #[test]
    fn test_table_data() {
        let stats = vec![(
            "Go".to_owned(),
            LanguageStats {
                vacancies_found: 5,
                vacancies_processed: 3,
                average_salary: Some(100_000),
            },
        )];
        let rows = table_data(&stats);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], strings(&HEADER));
        assert_eq!(rows[1], strings(&["Go", "5", "3", "100000"]));
    }

    #[test]
    fn test_table_data_keeps_order_and_marks_missing_average() {
        let stats = ["Swift", "C", "Java"]
            .into_iter()
            .map(|language| {
                (
                    language.to_owned(),
                    LanguageStats {
                        vacancies_found: 1,
                        vacancies_processed: 0,
                        average_salary: None,
                    },
                )
            })
            .collect::<Vec<_>>();
        let rows = table_data(&stats);
        let languages = rows.iter().skip(1).map(|row| row[0].as_str()).collect::<Vec<_>>();
        assert_eq!(languages, ["Swift", "C", "Java"]);
        assert!(rows.iter().skip(1).all(|row| row[3] == NO_DATA));
    }

    #[test]
    fn test_render_with_title() {
        let table = AsciiTable::new(
            vec![strings(&["Language", "Found"]), strings(&["Go", "5"])],
            "T",
        );
        let expected = "\
+T---------+-------+
| Language | Found |
+----------+-------+
| Go       | 5     |
+----------+-------+";
        assert_eq!(table.to_string(), expected);
    }

    #[test]
    fn test_render_drops_title_that_does_not_fit() {
        let table = AsciiTable::new(vec![strings(&["a"])], "Too long for the border");
        assert_eq!(table.to_string(), "+---+\n| a |\n+---+");
    }

    #[test]
    fn test_render_counts_characters_not_bytes() {
        let table = AsciiTable::new(vec![strings(&["Язык"]), strings(&["Go"])], "");
        let rendered = table.to_string();
        assert_eq!(rendered.lines().nth(1), Some("| Язык |"));
        assert_eq!(rendered.lines().nth(3), Some("| Go   |"));
    }
}
