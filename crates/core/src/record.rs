use serde::Deserialize;

use crate::stat::StatProfile;

/// One row of the static dataset.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatureRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "HP")]
    pub hp: u16,
    #[serde(rename = "Attack")]
    pub attack: u16,
    #[serde(rename = "Defense")]
    pub defense: u16,
    #[serde(rename = "Special_Attack")]
    pub special_attack: u16,
    #[serde(rename = "Special_Defense")]
    pub special_defense: u16,
    #[serde(rename = "Speed")]
    pub speed: u16,
    #[serde(rename = "Type", default)]
    pub primary_type: Option<String>,
    #[serde(rename = "Other_Type", default)]
    pub other_type: Option<String>,
    #[serde(rename = "Generation", default)]
    pub generation: Option<u8>,
}

impl CreatureRecord {
    pub const fn profile(&self) -> StatProfile {
        StatProfile {
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            special_attack: self.special_attack,
            special_defense: self.special_defense,
            speed: self.speed,
        }
    }

    /// "Electric" or "Grass / Poison"; `None` when the record carries no type.
    pub fn type_label(&self) -> Option<String> {
        match (self.primary_type.as_deref(), self.other_type.as_deref()) {
            (Some(primary), Some(other)) if !other.is_empty() => Some(format!("{primary} / {other}")),
            (Some(primary), _) => Some(primary.to_string()),
            (None, Some(other)) => Some(other.to_string()),
            (None, None) => None,
        }
    }
}

impl From<&CreatureRecord> for StatProfile {
    fn from(record: &CreatureRecord) -> Self {
        record.profile()
    }
}
