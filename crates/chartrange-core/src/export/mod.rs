//! Export formats for a rendered table.

mod console;

pub use console::format_table_console;

use serde_json::{Value as JsonValue, json};

use crate::error::Result;
use crate::render::RenderedRow;

pub fn format_tsv_header() -> String {
    ["Title", "Difficulty", "Level", "Min", "Avg", "Max", "Link"].join("\t")
}

pub fn format_tsv_row(row: &RenderedRow) -> String {
    [
        row.title.as_str(),
        row.difficulty.name(),
        row.level.as_str(),
        row.min.as_str(),
        row.avg.as_str(),
        row.max.as_str(),
        row.link.as_str(),
    ]
    .join("\t")
}

/// Header line followed by one line per row
pub fn format_table_tsv(rows: &[RenderedRow]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(format_tsv_header());
    lines.extend(rows.iter().map(format_tsv_row));
    lines.join("\n")
}

pub fn format_table_json(rows: &[RenderedRow]) -> Result<String> {
    let document: JsonValue = json!({
        "count": rows.len(),
        "rows": rows,
    });
    Ok(serde_json::to_string_pretty(&document)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Difficulty;

    fn make_row() -> RenderedRow {
        RenderedRow {
            title: "Night Drive".to_string(),
            link: "order.html?song_id=9&diff=hard".to_string(),
            difficulty: Difficulty::Hard,
            level: "7".to_string(),
            min: "12,000".to_string(),
            avg: "40,500".to_string(),
            max: "88,000".to_string(),
        }
    }

    #[test]
    fn test_format_table_tsv() {
        let tsv = format_table_tsv(&[make_row()]);
        let lines: Vec<&str> = tsv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Title\tDifficulty"));
        assert_eq!(
            lines[1],
            "Night Drive\thard\t7\t12,000\t40,500\t88,000\torder.html?song_id=9&diff=hard"
        );
    }

    #[test]
    fn test_format_table_json() {
        let json = format_table_json(&[make_row()]).unwrap();
        let value: JsonValue = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["rows"][0]["difficulty"], "hard");
        assert_eq!(value["rows"][0]["avg"], "40,500");
    }

    #[test]
    fn test_empty_table_tsv_has_header_only() {
        assert_eq!(format_table_tsv(&[]), format_tsv_header());
    }
}
