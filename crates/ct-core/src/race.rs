//! The closed set of playable races.

use serde::{Deserialize, Serialize};

use crate::resolve::Choice;

/// A character's race.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Race {
    /// Humans.
    Human,
    /// Dwarves.
    Dwarf,
    /// Elves.
    Elf,
    /// Dark elves.
    Drow,
}

impl Race {
    /// Every race, in declaration order.
    pub const ALL: [Race; 4] = [Self::Human, Self::Dwarf, Self::Elf, Self::Drow];

    /// The canonical lower-case name of this race.
    pub fn raw_value(self) -> &'static str {
        match self {
            Self::Human => "human",
            Self::Dwarf => "dwarf",
            Self::Elf => "elf",
            Self::Drow => "drow",
        }
    }
}

impl Choice for Race {
    fn choice_name(&self) -> &str {
        self.raw_value()
    }
}

impl std::fmt::Display for Race {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.raw_value())
    }
}
