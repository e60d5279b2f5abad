//! Ability scores and how they are rolled.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Lowest value a rolled ability score can take.
pub const STAT_MIN: i32 = 7;

/// Highest value a rolled ability score can take.
pub const STAT_MAX: i32 = 13;

/// One of the five ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ability {
    /// Physical power.
    Strength,
    /// Agility and reflexes.
    Dexterity,
    /// Reasoning and memory.
    Intellect,
    /// Perception and insight.
    Wisdom,
    /// Force of personality.
    Charisma,
}

impl Ability {
    /// Every ability, in display order.
    pub const ALL: [Ability; 5] = [
        Self::Strength,
        Self::Dexterity,
        Self::Intellect,
        Self::Wisdom,
        Self::Charisma,
    ];

    /// The label shown on a character description.
    pub fn label(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Dexterity => "Dexterity",
            Self::Intellect => "Intellect",
            Self::Wisdom => "Wisdom",
            Self::Charisma => "Charisma",
        }
    }
}

impl std::fmt::Display for Ability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A full set of ability scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityScores {
    /// Physical power.
    pub strength: i32,
    /// Agility and reflexes.
    pub dexterity: i32,
    /// Reasoning and memory.
    pub intellect: i32,
    /// Perception and insight.
    pub wisdom: i32,
    /// Force of personality.
    pub charisma: i32,
}

impl AbilityScores {
    /// Roll every score that `overrides` leaves unset.
    pub fn roll<R: Rng>(overrides: StatOverrides, rng: &mut R) -> Self {
        let mut pick = |value: Option<i32>| value.unwrap_or_else(|| roll_stat(rng));
        Self {
            strength: pick(overrides.strength),
            dexterity: pick(overrides.dexterity),
            intellect: pick(overrides.intellect),
            wisdom: pick(overrides.wisdom),
            charisma: pick(overrides.charisma),
        }
    }

    /// The score for a single ability.
    pub fn get(&self, ability: Ability) -> i32 {
        match ability {
            Ability::Strength => self.strength,
            Ability::Dexterity => self.dexterity,
            Ability::Intellect => self.intellect,
            Ability::Wisdom => self.wisdom,
            Ability::Charisma => self.charisma,
        }
    }

    /// Overwrite the score for a single ability.
    pub fn set(&mut self, ability: Ability, value: i32) {
        let slot = match ability {
            Ability::Strength => &mut self.strength,
            Ability::Dexterity => &mut self.dexterity,
            Ability::Intellect => &mut self.intellect,
            Ability::Wisdom => &mut self.wisdom,
            Ability::Charisma => &mut self.charisma,
        };
        *slot = value;
    }
}

/// Explicit ability scores that bypass rolling.
///
/// Values are kept as given, even outside the rolled range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatOverrides {
    /// Fixed strength, if any.
    pub strength: Option<i32>,
    /// Fixed dexterity, if any.
    pub dexterity: Option<i32>,
    /// Fixed intellect, if any.
    pub intellect: Option<i32>,
    /// Fixed wisdom, if any.
    pub wisdom: Option<i32>,
    /// Fixed charisma, if any.
    pub charisma: Option<i32>,
}

impl StatOverrides {
    /// No overrides: every score is rolled.
    pub fn none() -> Self {
        Self::default()
    }

    /// Fix every score.
    pub fn all(scores: AbilityScores) -> Self {
        Self {
            strength: Some(scores.strength),
            dexterity: Some(scores.dexterity),
            intellect: Some(scores.intellect),
            wisdom: Some(scores.wisdom),
            charisma: Some(scores.charisma),
        }
    }

    /// Fix strength.
    pub fn strength(mut self, value: i32) -> Self {
        self.strength = Some(value);
        self
    }

    /// Fix dexterity.
    pub fn dexterity(mut self, value: i32) -> Self {
        self.dexterity = Some(value);
        self
    }

    /// Fix intellect.
    pub fn intellect(mut self, value: i32) -> Self {
        self.intellect = Some(value);
        self
    }

    /// Fix wisdom.
    pub fn wisdom(mut self, value: i32) -> Self {
        self.wisdom = Some(value);
        self
    }

    /// Fix charisma.
    pub fn charisma(mut self, value: i32) -> Self {
        self.charisma = Some(value);
        self
    }
}

fn roll_stat<R: Rng>(rng: &mut R) -> i32 {
    rng.random_range(STAT_MIN..=STAT_MAX)
}
