use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use crate::chart::{Difficulty, DisplayMode};
use crate::config::controls;
use crate::error::{Error, Result};
use crate::filter::{FieldStore, FieldValue, Filters};

/// The filter controls of the table page, keyed by control id
#[derive(Debug, Clone, PartialEq)]
pub struct FilterPanel {
    controls: BTreeMap<String, FieldValue>,
}

impl Default for FilterPanel {
    fn default() -> Self {
        Self::standard()
    }
}

impl FilterPanel {
    /// Panel with no controls
    pub fn empty() -> Self {
        Self {
            controls: BTreeMap::new(),
        }
    }

    /// Standard template: every difficulty checked, original titles shown
    pub fn standard() -> Self {
        let mut panel = Self::empty();
        for difficulty in Difficulty::ALL {
            panel.add_control(difficulty.filter_control_id(), FieldValue::Checked(true));
        }
        panel.add_control(
            controls::DISPLAY,
            FieldValue::Selected((DisplayMode::default() as u8).to_string()),
        );
        panel
    }

    pub fn add_control(&mut self, id: impl Into<String>, initial: FieldValue) {
        self.controls.insert(id.into(), initial);
    }

    pub fn has_control(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Result<&FieldValue> {
        self.controls
            .get(id)
            .ok_or_else(|| Error::MissingControl(id.to_string()))
    }

    /// Set a control's value; the value must match the control's kind
    pub fn set(&mut self, id: &str, value: FieldValue) -> Result<()> {
        let slot = self
            .controls
            .get_mut(id)
            .ok_or_else(|| Error::MissingControl(id.to_string()))?;
        if !slot.same_kind(&value) {
            return Err(Error::ControlKindMismatch {
                id: id.to_string(),
                expected: slot.kind(),
                actual: value.kind(),
            });
        }
        *slot = value;
        Ok(())
    }

    pub fn is_checked(&self, id: &str) -> Result<bool> {
        match self.get(id)? {
            FieldValue::Checked(checked) => Ok(*checked),
            other => Err(Error::ControlKindMismatch {
                id: id.to_string(),
                expected: "checkbox",
                actual: other.kind(),
            }),
        }
    }

    pub fn selected(&self, id: &str) -> Result<&str> {
        match self.get(id)? {
            FieldValue::Selected(value) => Ok(value),
            other => Err(Error::ControlKindMismatch {
                id: id.to_string(),
                expected: "select",
                actual: other.kind(),
            }),
        }
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty, checked: bool) -> Result<()> {
        self.set(
            &difficulty.filter_control_id(),
            FieldValue::Checked(checked),
        )
    }

    pub fn set_display(&mut self, display: DisplayMode) -> Result<()> {
        self.set(
            controls::DISPLAY,
            FieldValue::Selected((display as u8).to_string()),
        )
    }

    /// Check that every control the filters read is present
    pub fn validate(&self) -> Result<()> {
        for difficulty in Difficulty::ALL {
            self.is_checked(&difficulty.filter_control_id())?;
        }
        self.selected(controls::DISPLAY)?;
        Ok(())
    }

    /// Read the current filter selection from the controls
    pub fn parse_filters(&self) -> Result<Filters> {
        let mut difficulties = BTreeSet::new();
        for difficulty in Difficulty::ALL {
            if self.is_checked(&difficulty.filter_control_id())? {
                difficulties.insert(difficulty);
            }
        }
        let display = DisplayMode::parse(self.selected(controls::DISPLAY)?)?;
        Ok(Filters {
            difficulties,
            display,
        })
    }

    /// Persist every control, one field per control
    pub fn save_filters(&self, store: &mut dyn FieldStore) -> Result<()> {
        for (id, value) in &self.controls {
            store.save_field(id, value)?;
        }
        Ok(())
    }

    /// Restore persisted values into the controls.
    ///
    /// Controls without a stored value keep their current value. Stored
    /// values of the wrong kind, and display selections that do not name a
    /// display mode, are skipped.
    pub fn load_filters(&mut self, store: &dyn FieldStore) {
        for (id, slot) in self.controls.iter_mut() {
            match store.load_field(id) {
                Some(FieldValue::Selected(value))
                    if id == controls::DISPLAY && DisplayMode::parse(&value).is_err() =>
                {
                    warn!("Ignoring stored display mode {:?}", value)
                }
                Some(value) if value.same_kind(slot) => *slot = value,
                Some(value) => warn!(
                    "Ignoring stored {} value for {} control {}",
                    value.kind(),
                    slot.kind(),
                    id
                ),
                None => {}
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.controls.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::MemoryFieldStore;

    #[test]
    fn test_standard_panel_parses_all_difficulties() {
        let panel = FilterPanel::standard();
        let filters = panel.parse_filters().unwrap();
        assert_eq!(filters.difficulties.len(), 5);
        assert_eq!(filters.display, DisplayMode::Original);
    }

    #[test]
    fn test_parse_reflects_unchecked_boxes() {
        let mut panel = FilterPanel::standard();
        panel.set_difficulty(Difficulty::Easy, false).unwrap();
        panel.set_display(DisplayMode::English).unwrap();

        let filters = panel.parse_filters().unwrap();
        assert!(!filters.difficulties.contains(&Difficulty::Easy));
        assert!(filters.difficulties.contains(&Difficulty::Special));
        assert_eq!(filters.display, DisplayMode::English);
    }

    #[test]
    fn test_missing_control_fails_fast() {
        let mut panel = FilterPanel::empty();
        panel.add_control("display", FieldValue::Selected("0".to_string()));
        assert!(matches!(
            panel.parse_filters(),
            Err(Error::MissingControl(id)) if id == "easy-filter"
        ));
        assert!(panel.validate().is_err());
    }

    #[test]
    fn test_set_rejects_kind_mismatch() {
        let mut panel = FilterPanel::standard();
        let result = panel.set("display", FieldValue::Checked(true));
        assert!(matches!(result, Err(Error::ControlKindMismatch { .. })));
    }

    #[test]
    fn test_invalid_display_value() {
        let mut panel = FilterPanel::standard();
        panel
            .set("display", FieldValue::Selected("9".to_string()))
            .unwrap();
        assert!(matches!(
            panel.parse_filters(),
            Err(Error::InvalidDisplayMode(_))
        ));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = MemoryFieldStore::new();
        let mut panel = FilterPanel::standard();
        panel.set_difficulty(Difficulty::Hard, false).unwrap();
        panel.set_display(DisplayMode::Romanized).unwrap();
        panel.save_filters(&mut store).unwrap();
        assert_eq!(store.len(), 6);

        let mut restored = FilterPanel::standard();
        restored.load_filters(&store);
        assert_eq!(restored, panel);
    }

    #[test]
    fn test_load_skips_wrong_kind_and_unknown_ids() {
        let mut store = MemoryFieldStore::new();
        store
            .save_field("easy-filter", &FieldValue::Selected("yes".to_string()))
            .unwrap();
        store
            .save_field("other", &FieldValue::Checked(false))
            .unwrap();

        let mut panel = FilterPanel::standard();
        panel.load_filters(&store);
        assert!(panel.is_checked("easy-filter").unwrap());
        assert!(!panel.has_control("other"));
    }

    #[test]
    fn test_load_skips_unknown_display_mode() {
        let mut store = MemoryFieldStore::new();
        store
            .save_field("display", &FieldValue::Selected("7".to_string()))
            .unwrap();

        let mut panel = FilterPanel::standard();
        panel.load_filters(&store);
        assert_eq!(panel.selected("display").unwrap(), "0");
        assert_eq!(panel.parse_filters().unwrap().display, DisplayMode::Original);

        store
            .save_field("display", &FieldValue::Selected("2".to_string()))
            .unwrap();
        panel.load_filters(&store);
        assert_eq!(panel.parse_filters().unwrap().display, DisplayMode::Romanized);
    }
}
