//! Rendering of statistics tables for the terminal.

use crate::args::OutputFormat;
use survey_core::StatsTable;

const HEADERS: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Turns a titled statistics table into displayable text.
pub(crate) trait ReportSink {
    fn render(&self, title: &str, table: &StatsTable) -> String;
}

impl OutputFormat {
    pub(crate) fn sink(self) -> Box<dyn ReportSink> {
        match self {
            Self::Table => Box::new(AsciiTableReport),
            Self::Json => Box::new(JsonReport),
        }
    }
}

/// Bordered ASCII table with the title set into the top border.
pub(crate) struct AsciiTableReport;

impl ReportSink for AsciiTableReport {
    fn render(&self, title: &str, table: &StatsTable) -> String {
        let header: Vec<String> = HEADERS.iter().map(|h| (*h).to_string()).collect();
        let rows: Vec<Vec<String>> = table
            .iter()
            .map(|row| {
                vec![
                    row.language.clone(),
                    row.stats.found.to_string(),
                    row.stats.processed.to_string(),
                    row.stats.average_salary.to_string(),
                ]
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let border = border_line(&widths);
        let mut lines = vec![
            titled_border(&border, title),
            row_line(&header, &widths),
            border.clone(),
        ];
        lines.extend(rows.iter().map(|row| row_line(row, &widths)));
        lines.push(border);
        lines.join("\n")
    }
}

/// Pretty-printed JSON document with the title and the rows.
pub(crate) struct JsonReport;

impl ReportSink for JsonReport {
    fn render(&self, title: &str, table: &StatsTable) -> String {
        let document = serde_json::json!({
            "title": title,
            "rows": table,
        });
        format!("{document:#}")
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.push_str(&"-".repeat(width + 2));
        line.push('+');
    }
    line
}

/// Overlay the title on the top border; titles that don't fit are dropped.
fn titled_border(border: &str, title: &str) -> String {
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border.chars().count() {
        return border.to_string();
    }

    let mut line = String::from("+");
    line.push_str(title);
    line.extend(border.chars().skip(1 + title_len));
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (cell, width) in cells.iter().zip(widths) {
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(width - cell.chars().count()));
        line.push_str(" |");
    }
    line
}
