use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::FieldStore;
use crate::render::RenderSink;
use crate::scoring::ScoreModel;
use crate::session::{Event, EventQueue};
use crate::table::{SongTable, SortColumn};

/// Binds user events to a [`SongTable`] and its render sink.
///
/// Events are handled strictly one after another; each one finishes its
/// redraw before the next is taken from the queue.
pub struct Session<M, S, R> {
    table: SongTable<M, S>,
    sink: R,
    queue: EventQueue,
    headers_bound: bool,
}

impl<M, S, R> Session<M, S, R>
where
    M: ScoreModel,
    S: FieldStore,
    R: RenderSink,
{
    /// Restore persisted filters and bind the controls.
    ///
    /// Fails if a difficulty checkbox or the display selector is missing.
    /// Without a header row (`headers = false`) header clicks are ignored.
    pub fn init(mut table: SongTable<M, S>, mut sink: R, headers: bool) -> Result<Self> {
        table.load_filters();
        table.panel().validate()?;

        if headers {
            let sort = table.sort_state();
            sink.show_sort_indicator(sort.column, sort.direction.glyph());
        } else {
            debug!("No header row; sorting by clicks disabled");
        }

        Ok(Self {
            table,
            sink,
            queue: EventQueue::new(),
            headers_bound: headers,
        })
    }

    pub fn table(&self) -> &SongTable<M, S> {
        &self.table
    }

    pub fn sink(&self) -> &R {
        &self.sink
    }

    pub fn into_parts(self) -> (SongTable<M, S>, R) {
        (self.table, self.sink)
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Handle every queued event in order.
    ///
    /// Stops at the first failing event and drops the rest of the queue.
    pub fn run_pending(&mut self) -> Result<usize> {
        let mut handled = 0;
        while let Some(event) = self.queue.pop() {
            if let Err(e) = self.dispatch(event) {
                warn!(
                    "Event failed, dropping {} pending events: {}",
                    self.queue.len(),
                    e
                );
                self.queue.clear();
                return Err(e);
            }
            handled += 1;
        }
        Ok(handled)
    }

    /// Handle one event to completion
    pub fn dispatch(&mut self, event: Event) -> Result<()> {
        debug!("Dispatching {:?}", event);
        match event {
            Event::OptionsChanged(options) => {
                self.table.gen_song_table(options, &mut self.sink)?;
            }
            Event::FilterToggled {
                difficulty,
                checked,
            } => {
                self.table
                    .panel_mut()
                    .set_difficulty(difficulty, checked)?;
                self.table.display_table(&mut self.sink)?;
            }
            Event::DisplayChanged(display) => {
                self.table.panel_mut().set_display(display)?;
                self.table.display_table(&mut self.sink)?;
            }
            Event::HeaderClicked(column) => self.header_clicked(column)?,
        }
        Ok(())
    }

    fn header_clicked(&mut self, column: SortColumn) -> Result<()> {
        if !self.headers_bound {
            debug!("Ignoring click on {} header", column.name());
            return Ok(());
        }

        let mut sort = self.table.sort_state();
        self.sink.hide_sort_indicator(sort.column);
        sort.click(column);
        self.sink
            .show_sort_indicator(sort.column, sort.direction.glyph());
        self.table.set_sort_state(sort);

        self.table.display_table(&mut self.sink)?;
        Ok(())
    }
}
