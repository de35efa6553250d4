use std::collections::VecDeque;

use crate::chart::{Difficulty, DisplayMode};
use crate::scoring::ScoringOptions;
use crate::table::SortColumn;

/// A user interaction the table reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// The scoring options changed; rows are rebuilt
    OptionsChanged(ScoringOptions),
    /// A difficulty checkbox changed
    FilterToggled { difficulty: Difficulty, checked: bool },
    /// The display selector changed
    DisplayChanged(DisplayMode),
    /// A column header was clicked
    HeaderClicked(SortColumn),
}

/// FIFO of pending events, drained one at a time
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    pending: VecDeque<Event>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    pub fn pop(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
