//! Conversion settings
//!
//! Deserialized from the host with every field optional, so `{}` or
//! `{ strict: true }` are both valid.

use serde::{Deserialize, Deserializer, Serialize};

use crate::models::Direction;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct ConversionSettings {
    /// Fail on non-empty lines that match neither the grid nor the clue grammar
    pub strict: bool,

    /// Tag name emitted around italic runs in XML output; must be an XML name
    #[serde(deserialize_with = "deserialize_tag_name")]
    pub emphasis_tag: String,

    pub across_heading: String,
    pub down_heading: String,
}

impl ConversionSettings {
    pub fn heading(&self, direction: Direction) -> &str {
        match direction {
            Direction::Across => &self.across_heading,
            Direction::Down => &self.down_heading,
        }
    }
}

/// Whether `name` can stand as an element name: a letter or `_` followed by
/// letters, digits, `-`, `_` or `.`
pub fn is_xml_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|ch| ch.is_alphanumeric() || matches!(ch, '-' | '_' | '.'))
        }
        _ => false,
    }
}

fn deserialize_tag_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    if is_xml_name(&name) {
        Ok(name)
    } else {
        Err(serde::de::Error::custom(format!(
            "emphasisTag {:?} is not a valid XML element name",
            name
        )))
    }
}

impl Default for ConversionSettings {
    fn default() -> Self {
        Self {
            strict: false,
            emphasis_tag: "i".to_string(),
            across_heading: "Across".to_string(),
            down_heading: "Down".to_string(),
        }
    }
}
