use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;

/// Persisted value of a single control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Checkbox state
    Checked(bool),
    /// Selector value
    Selected(String),
}

impl FieldValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Checked(_) => "checkbox",
            Self::Selected(_) => "select",
        }
    }

    pub fn same_kind(&self, other: &FieldValue) -> bool {
        self.kind() == other.kind()
    }
}

/// Per-field key-value persistence, keyed by control id
pub trait FieldStore {
    fn save_field(&mut self, id: &str, value: &FieldValue) -> Result<()>;

    fn load_field(&self, id: &str) -> Option<FieldValue>;
}

impl<F: FieldStore + ?Sized> FieldStore for Box<F> {
    fn save_field(&mut self, id: &str, value: &FieldValue) -> Result<()> {
        (**self).save_field(id, value)
    }

    fn load_field(&self, id: &str) -> Option<FieldValue> {
        (**self).load_field(id)
    }
}

/// In-memory store; contents are lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryFieldStore {
    fields: BTreeMap<String, FieldValue>,
}

impl MemoryFieldStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FieldStore for MemoryFieldStore {
    fn save_field(&mut self, id: &str, value: &FieldValue) -> Result<()> {
        self.fields.insert(id.to_string(), value.clone());
        Ok(())
    }

    fn load_field(&self, id: &str) -> Option<FieldValue> {
        self.fields.get(id).cloned()
    }
}

/// Store backed by a JSON object on disk, rewritten on every save
#[derive(Debug, Clone)]
pub struct JsonFieldStore {
    path: PathBuf,
    fields: BTreeMap<String, FieldValue>,
}

impl JsonFieldStore {
    /// Open the store at `path`; a missing file starts an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let fields = if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_json::from_str(&content)?
        } else {
            BTreeMap::new()
        };
        debug!("Opened field store {:?} ({} fields)", path, fields.len());
        Ok(Self { path, fields })
    }
}

impl FieldStore for JsonFieldStore {
    fn save_field(&mut self, id: &str, value: &FieldValue) -> Result<()> {
        if self.fields.get(id) == Some(value) {
            return Ok(());
        }
        self.fields.insert(id.to_string(), value.clone());
        fs::write(&self.path, serde_json::to_string_pretty(&self.fields)?)?;
        Ok(())
    }

    fn load_field(&self, id: &str) -> Option<FieldValue> {
        self.fields.get(id).cloned()
    }
}
