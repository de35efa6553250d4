//! Filter controls and their persistence.
//!
//! - `FilterPanel` - difficulty checkboxes and the display selector
//! - `Filters`, `passes` - parsed selection and the row predicate
//! - `FieldStore` - per-control persistence (`MemoryFieldStore`, `JsonFieldStore`)

mod filters;
mod panel;
mod store;

pub use filters::*;
pub use panel::*;
pub use store::*;
