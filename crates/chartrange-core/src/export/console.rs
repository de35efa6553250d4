//! Console table output with colored difficulties

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::Difficulty;
use crate::config::controls;
use crate::render::RenderedRow;
use crate::table::SortColumn;

const HEADERS: [&str; 6] = ["TITLE", "DIFF", "LV", "MIN", "AVG", "MAX"];

/// Format rows as an aligned table.
///
/// `indicators` lists the headers with a visible sort arrow.
pub fn format_table_console(
    rows: &[RenderedRow],
    indicators: &[(SortColumn, &'static str)],
) -> String {
    let headers: Vec<String> = SortColumn::ALL
        .iter()
        .map(|column| {
            let label = HEADERS[column.index()];
            match indicators.iter().find(|(c, _)| c == column) {
                Some((_, glyph)) => format!("{} {}", label, arrow(glyph)),
                None => label.to_string(),
            }
        })
        .collect();

    let cells: Vec<[&str; 6]> = rows
        .iter()
        .map(|row| {
            [
                row.title.as_str(),
                row.difficulty.name(),
                row.level.as_str(),
                row.min.as_str(),
                row.avg.as_str(),
                row.max.as_str(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let header_line: Vec<String> = SortColumn::ALL
        .iter()
        .map(|column| pad(&headers[column.index()], widths[column.index()], *column))
        .collect();
    let _ = writeln!(output, "{}", header_line.join("  ").bold());

    let rule_width = widths.iter().sum::<usize>() + 2 * (widths.len() - 1);
    let _ = writeln!(output, "{}", "━".repeat(rule_width).dimmed());

    for (row, text) in rows.iter().zip(cells.iter()) {
        let line: Vec<String> = SortColumn::ALL
            .iter()
            .map(|column| {
                let padded = pad(text[column.index()], widths[column.index()], *column);
                if *column == SortColumn::Difficulty {
                    colored_difficulty(row.difficulty, &padded)
                } else {
                    padded
                }
            })
            .collect();
        let _ = writeln!(output, "{}", line.join("  "));
    }

    let _ = write!(output, "{} charts", rows.len());
    output
}

fn arrow(glyph: &str) -> &'static str {
    if glyph == controls::ARROW_UP { "▲" } else { "▼" }
}

/// Text columns are left-aligned, numbers right-aligned
fn pad(text: &str, width: usize, column: SortColumn) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if column.is_textual() {
        format!("{}{}", text, fill)
    } else {
        format!("{}{}", fill, text)
    }
}

fn colored_difficulty(difficulty: Difficulty, text: &str) -> String {
    match difficulty {
        Difficulty::Easy => text.green().to_string(),
        Difficulty::Normal => text.blue().to_string(),
        Difficulty::Hard => text.yellow().to_string(),
        Difficulty::Expert => text.red().to_string(),
        Difficulty::Special => text.purple().to_string(),
    }
}
