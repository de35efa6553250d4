//! Show command: print the table once.

use anyhow::Result;
use chartrange_core::export::format_table_console;
use chartrange_core::{
    Config, Difficulty, DisplayMode, Event, SortColumn, SortDirection, SortState,
};

use crate::app::{self, CliSession};

pub struct ShowOptions {
    pub sort: Option<SortColumn>,
    pub direction: Option<SortDirection>,
    pub display: Option<DisplayMode>,
    pub only: Vec<Difficulty>,
}

pub fn run(config: &Config, options: ShowOptions) -> Result<()> {
    let sort = sort_state(options.sort, options.direction);
    let mut session = app::build_session(config, sort)?;

    queue_events(&mut session, config, &options);
    session.run_pending()?;

    println!("{}", render(&session));
    Ok(())
}

/// Explicit sort column/direction, or `None` to keep the default
fn sort_state(column: Option<SortColumn>, direction: Option<SortDirection>) -> Option<SortState> {
    match (column, direction) {
        (None, None) => None,
        (column, direction) => {
            let column = column.unwrap_or(SortState::default().column);
            let direction = direction.unwrap_or_else(|| column.default_direction());
            Some(SortState::new(column, direction))
        }
    }
}

fn queue_events(session: &mut CliSession, config: &Config, options: &ShowOptions) {
    session.push(Event::OptionsChanged(config.options.clone()));
    if !options.only.is_empty() {
        for difficulty in Difficulty::ALL {
            session.push(Event::FilterToggled {
                difficulty,
                checked: options.only.contains(&difficulty),
            });
        }
    }
    if let Some(display) = options.display {
        session.push(Event::DisplayChanged(display));
    }
}

pub fn render(session: &CliSession) -> String {
    let sink = session.sink();
    format_table_console(sink.rows(), &sink.visible_indicators())
}
