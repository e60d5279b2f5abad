//! Character classes.
//!
//! Five classes ship built in; embedders can add their own through
//! [`CharacterClass::Custom`] and a [`ClassRegistry`](crate::ClassRegistry).

use serde::{Deserialize, Serialize};

use crate::resolve::Choice;

/// A character's role or profession.
///
/// Serializes as its display name, built-in or custom alike.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum CharacterClass {
    /// Front-line fighter.
    Warrior,
    /// Sneak and skirmisher.
    Rogue,
    /// Arcane caster.
    Mage,
    /// Nature caster.
    Druid,
    /// Spirit caster.
    Shaman,
    /// A class registered at runtime, identified by its display name.
    Custom(String),
}

impl CharacterClass {
    /// The built-in classes, in registration order.
    pub fn built_ins() -> [CharacterClass; 5] {
        [
            Self::Warrior,
            Self::Rogue,
            Self::Mage,
            Self::Druid,
            Self::Shaman,
        ]
    }

    /// Map a tag such as "mage" or "Warrior" to a built-in class.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        match tag.as_str() {
            "warrior" => Some(Self::Warrior),
            "rogue" => Some(Self::Rogue),
            "mage" => Some(Self::Mage),
            "druid" => Some(Self::Druid),
            "shaman" => Some(Self::Shaman),
            _ => None,
        }
    }

    /// The stable display name of this class.
    pub fn name(&self) -> &str {
        match self {
            Self::Warrior => "Warrior",
            Self::Rogue => "Rogue",
            Self::Mage => "Mage",
            Self::Druid => "Druid",
            Self::Shaman => "Shaman",
            Self::Custom(name) => name,
        }
    }
}

impl Choice for CharacterClass {
    fn choice_name(&self) -> &str {
        self.name()
    }
}

impl From<CharacterClass> for String {
    fn from(class: CharacterClass) -> Self {
        match class {
            CharacterClass::Custom(name) => name,
            built_in => built_in.name().to_string(),
        }
    }
}

impl From<String> for CharacterClass {
    fn from(name: String) -> Self {
        Self::from_tag(&name).unwrap_or(Self::Custom(name))
    }
}

impl std::fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
