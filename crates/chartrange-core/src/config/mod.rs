//! Configuration and page constants.
//!
//! - `Config` - TOML configuration (catalog, persisted state, scoring options)
//! - `controls` - control ids, link target and sort indicator glyphs

mod settings;

pub use settings::*;

/// Fixed identifiers of the table page.
pub mod controls {
    /// Display-mode selector
    pub const DISPLAY: &str = "display";

    /// Page each title links to
    pub const ORDER_PAGE: &str = "order.html";

    /// Sort indicator glyph for ascending order
    pub const ARROW_UP: &str = "arrow_drop_up";

    /// Sort indicator glyph for descending order
    pub const ARROW_DOWN: &str = "arrow_drop_down";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_constants() {
        assert_eq!(controls::DISPLAY, "display");
        assert_eq!(controls::ORDER_PAGE, "order.html");
    }
}
