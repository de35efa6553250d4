//! Render surface abstraction.
//!
//! The table never paints anything itself; it hands finished rows and
//! sort-indicator changes to a [`RenderSink`].

use serde::Serialize;

use crate::chart::Difficulty;
use crate::table::SortColumn;

/// One displayed table row, with every cell already formatted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub title: String,
    /// Target of the title link
    pub link: String,
    pub difficulty: Difficulty,
    pub level: String,
    pub min: String,
    pub avg: String,
    pub max: String,
}

pub trait RenderSink {
    /// Remove every body row
    fn reset_table(&mut self);

    fn add_row(&mut self, row: RenderedRow);

    fn hide_sort_indicator(&mut self, _column: SortColumn) {}

    fn show_sort_indicator(&mut self, _column: SortColumn, _glyph: &'static str) {}
}

impl<R: RenderSink + ?Sized> RenderSink for &mut R {
    fn reset_table(&mut self) {
        (**self).reset_table()
    }

    fn add_row(&mut self, row: RenderedRow) {
        (**self).add_row(row)
    }

    fn hide_sort_indicator(&mut self, column: SortColumn) {
        (**self).hide_sort_indicator(column)
    }

    fn show_sort_indicator(&mut self, column: SortColumn, glyph: &'static str) {
        (**self).show_sort_indicator(column, glyph)
    }
}

/// Sink that keeps the table in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemorySink {
    rows: Vec<RenderedRow>,
    indicators: [Option<&'static str>; 6],
    resets: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[RenderedRow] {
        &self.rows
    }

    /// Number of times the table body was cleared
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// Visible indicator glyph of a header, if any
    pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
        self.indicators[column.index()]
    }

    pub fn visible_indicators(&self) -> Vec<(SortColumn, &'static str)> {
        SortColumn::ALL
            .into_iter()
            .filter_map(|column| self.indicator(column).map(|glyph| (column, glyph)))
            .collect()
    }
}

impl RenderSink for MemorySink {
    fn reset_table(&mut self) {
        self.rows.clear();
        self.resets += 1;
    }

    fn add_row(&mut self, row: RenderedRow) {
        self.rows.push(row);
    }

    fn hide_sort_indicator(&mut self, column: SortColumn) {
        self.indicators[column.index()] = None;
    }

    fn show_sort_indicator(&mut self, column: SortColumn, glyph: &'static str) {
        self.indicators[column.index()] = Some(glyph);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(title: &str) -> RenderedRow {
        RenderedRow {
            title: title.to_string(),
            link: "order.html?song_id=1&diff=easy".to_string(),
            difficulty: Difficulty::Easy,
            level: "1".to_string(),
            min: "1%".to_string(),
            avg: "2%".to_string(),
            max: "3%".to_string(),
        }
    }

    #[test]
    fn test_memory_sink_reset_clears_rows() {
        let mut sink = MemorySink::new();
        sink.add_row(make_row("a"));
        sink.add_row(make_row("b"));
        assert_eq!(sink.rows().len(), 2);

        sink.reset_table();
        assert!(sink.rows().is_empty());
        assert_eq!(sink.resets(), 1);
    }

    #[test]
    fn test_memory_sink_indicators() {
        let mut sink = MemorySink::new();
        sink.show_sort_indicator(SortColumn::Avg, "arrow_drop_down");
        assert_eq!(
            sink.visible_indicators(),
            vec![(SortColumn::Avg, "arrow_drop_down")]
        );

        sink.hide_sort_indicator(SortColumn::Avg);
        sink.show_sort_indicator(SortColumn::Title, "arrow_drop_up");
        assert_eq!(sink.indicator(SortColumn::Avg), None);
        assert_eq!(sink.indicator(SortColumn::Title), Some("arrow_drop_up"));
    }

    #[test]
    fn test_sink_through_mut_ref() {
        fn fill<R: RenderSink>(mut sink: R) {
            sink.reset_table();
            sink.add_row(make_row("a"));
        }

        let mut sink = MemorySink::new();
        fill(&mut sink);
        assert_eq!(sink.rows().len(), 1);
        assert_eq!(sink.resets(), 1);
    }
}
