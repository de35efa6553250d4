use std::sync::Arc;

use tracing::{debug, info};

use crate::chart::Song;
use crate::error::Result;
use crate::filter::{FieldStore, FilterPanel, Filters, passes};
use crate::render::{RenderSink, RenderedRow};
use crate::scoring::{ScoreModel, ScoringOptions};
use crate::table::{
    ChartRow, SortState, SortableRow, build_rows, format_score, order_link, sort_rows,
};

/// Chart range table state: catalog, scoring options, rows, filters and sort.
///
/// `gen_song_table` rebuilds the rows for new options; `display_table`
/// re-filters, re-sorts and redraws without touching the score model.
pub struct SongTable<M, S> {
    model: M,
    store: S,
    songs: Vec<Arc<Song>>,
    panel: FilterPanel,
    options: ScoringOptions,
    rows: Vec<ChartRow>,
    sort: SortState,
}

impl<M: ScoreModel, S: FieldStore> SongTable<M, S> {
    pub fn new(model: M, store: S, songs: Vec<Song>) -> Self {
        Self {
            model,
            store,
            songs: songs.into_iter().map(Arc::new).collect(),
            panel: FilterPanel::standard(),
            options: ScoringOptions::default(),
            rows: Vec::new(),
            sort: SortState::default(),
        }
    }

    pub fn with_panel(mut self, panel: FilterPanel) -> Self {
        self.panel = panel;
        self
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn panel(&self) -> &FilterPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut FilterPanel {
        &mut self.panel
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    pub fn rows(&self) -> &[ChartRow] {
        &self.rows
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn set_sort_state(&mut self, sort: SortState) {
        self.sort = sort;
    }

    /// Restore persisted control values into the filter panel
    pub fn load_filters(&mut self) {
        self.panel.load_filters(&self.store);
    }

    /// Store new scoring options, rebuild every row and redraw
    pub fn gen_song_table<R: RenderSink>(
        &mut self,
        options: ScoringOptions,
        sink: &mut R,
    ) -> Result<usize> {
        info!(
            "Rebuilding chart table (bp: {})",
            options
                .break_point()
                .map(|bp| bp.to_string())
                .unwrap_or_else(|| "unset".to_string())
        );
        self.options = options;
        self.rows = build_rows(&self.model, &self.options, &self.songs);
        self.display_table(sink)
    }

    /// Filtered rows projected for display, in current sort order
    pub fn visible_rows(&self, filters: &Filters) -> Vec<SortableRow> {
        let mut sortable: Vec<SortableRow> = self
            .rows
            .iter()
            .filter(|row| passes(filters, row))
            .filter_map(|row| {
                let title = row.song.locale_title(filters.display)?;
                Some(SortableRow {
                    title: title.to_string(),
                    difficulty: row.difficulty,
                    level: row.chart.level,
                    min: row.min,
                    avg: row.avg,
                    max: row.max,
                    song_id: row.song.song_id,
                })
            })
            .collect();
        sort_rows(&mut sortable, self.sort);
        sortable
    }

    /// Redraw the table from the current filters and sort state.
    ///
    /// Returns the number of rows drawn.
    pub fn display_table<R: RenderSink>(&mut self, sink: &mut R) -> Result<usize> {
        let filters = self.panel.parse_filters()?;
        self.panel.save_filters(&mut self.store)?;

        let sortable = self.visible_rows(&filters);
        let percentage = self.options.is_percentage();

        sink.reset_table();
        for row in &sortable {
            sink.add_row(RenderedRow {
                title: row.title.clone(),
                link: order_link(row.song_id, row.difficulty),
                difficulty: row.difficulty,
                level: row.level.to_string(),
                min: format_score(row.min, percentage),
                avg: format_score(row.avg, percentage),
                max: format_score(row.max, percentage),
            });
        }

        debug!(
            "Displayed {} of {} rows (sort: {} {:?})",
            sortable.len(),
            self.rows.len(),
            self.sort.column.name(),
            self.sort.direction
        );
        Ok(sortable.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Chart, Difficulty, DisplayMode};
    use crate::filter::{FieldValue, MemoryFieldStore};
    use crate::render::MemorySink;
    use crate::scoring::MockScoreModel;
    use std::collections::BTreeMap;

    fn make_songs() -> Vec<Song> {
        let mut charts = BTreeMap::new();
        charts.insert(Difficulty::Normal, Some(Chart::with_level(5)));
        charts.insert(Difficulty::Expert, Some(Chart::with_level(10)));
        vec![Song {
            song_id: 101,
            title: "First Light".to_string(),
            charts,
            ..Default::default()
        }]
    }

    fn make_table() -> SongTable<MockScoreModel, MemoryFieldStore> {
        SongTable::new(MockScoreModel::new(), MemoryFieldStore::new(), make_songs())
    }

    #[test]
    fn test_percentage_mode_suffix() {
        let mut table = make_table();
        let mut sink = MemorySink::new();
        let drawn = table
            .gen_song_table(ScoringOptions::default(), &mut sink)
            .unwrap();

        assert_eq!(drawn, 2);
        for row in sink.rows() {
            assert!(row.min.ends_with('%'));
            assert!(row.avg.ends_with('%'));
            assert!(row.max.ends_with('%'));
        }
        // Default sort: avg descending, so expert first
        assert_eq!(sink.rows()[0].difficulty, Difficulty::Expert);
        assert_eq!(sink.rows()[0].avg, "60,000%");
        assert_eq!(sink.rows()[0].link, "order.html?song_id=101&diff=expert");
    }

    #[test]
    fn test_break_point_mode_has_no_suffix() {
        let mut table = make_table();
        let mut sink = MemorySink::new();
        table
            .gen_song_table(ScoringOptions::with_bp(50.0), &mut sink)
            .unwrap();
        assert_eq!(sink.rows()[0].max, "100,000");
        assert!(!sink.rows()[0].avg.ends_with('%'));
    }

    #[test]
    fn test_display_saves_every_control() {
        let mut table = make_table();
        let mut sink = MemorySink::new();
        table.display_table(&mut sink).unwrap();
        assert_eq!(table.store().len(), 6);
        assert_eq!(
            table.store().load_field("display"),
            Some(FieldValue::Selected("0".to_string()))
        );
    }

    #[test]
    fn test_display_without_rebuild_keeps_model_untouched() {
        let mut table = make_table();
        let mut sink = MemorySink::new();
        table
            .gen_song_table(ScoringOptions::default(), &mut sink)
            .unwrap();
        assert_eq!(table.model().calls(), 2);

        table
            .panel_mut()
            .set_difficulty(Difficulty::Normal, false)
            .unwrap();
        table.display_table(&mut sink).unwrap();
        assert_eq!(table.model().calls(), 2);
        assert_eq!(sink.rows().len(), 1);
        assert_eq!(sink.rows()[0].difficulty, Difficulty::Expert);
    }

    #[test]
    fn test_missing_title_rows_are_skipped() {
        let mut table = make_table();
        let mut sink = MemorySink::new();
        table
            .gen_song_table(ScoringOptions::default(), &mut sink)
            .unwrap();

        table.panel_mut().set_display(DisplayMode::English).unwrap();
        let drawn = table.display_table(&mut sink).unwrap();
        assert_eq!(drawn, 0);
        assert!(sink.rows().is_empty());
        assert_eq!(table.rows().len(), 2);
    }
}
