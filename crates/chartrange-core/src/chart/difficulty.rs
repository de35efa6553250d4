use serde::{Deserialize, Serialize};
use strum::{EnumString, FromRepr, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    FromRepr,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
pub enum Difficulty {
    Easy = 0,
    Normal = 1,
    Hard = 2,
    Expert = 3,
    Special = 4,
}

impl Difficulty {
    /// All difficulties in catalog order.
    pub const ALL: [Difficulty; 5] = [
        Self::Easy,
        Self::Normal,
        Self::Hard,
        Self::Expert,
        Self::Special,
    ];

    pub fn from_u8(value: u8) -> Option<Self> {
        Self::from_repr(value)
    }

    /// Lowercase name, as used in control ids and order-page links
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Id of the checkbox that toggles this difficulty (e.g. "expert-filter")
    pub fn filter_control_id(&self) -> String {
        format!("{}-filter", self.name())
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
