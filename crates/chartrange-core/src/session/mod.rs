//! Event binding.
//!
//! - `Event`, `EventQueue` - user interactions and their FIFO
//! - `Session` - routes each event to the table and redraws

mod binder;
mod event;

pub use binder::*;
pub use event::*;
