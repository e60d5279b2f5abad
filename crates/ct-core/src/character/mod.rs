//! The character record produced by a finished creation dialogue.
//!
//! A [`Character`] is validated on construction and immutable afterwards.
//! Ability scores not given explicitly are rolled from [`STAT_MIN`] to
//! [`STAT_MAX`] inclusive.

pub mod abilities;

pub use abilities::{Ability, AbilityScores, STAT_MAX, STAT_MIN, StatOverrides};

use rand::Rng;
use serde::Serialize;

use crate::class::CharacterClass;
use crate::error::{CharacterError, CharacterResult};
use crate::race::Race;

/// A finished player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Character {
    name: String,
    race: Race,
    class: CharacterClass,
    #[serde(flatten)]
    abilities: AbilityScores,
}

impl Character {
    /// Returns true if `name` is non-empty and made only of letters.
    pub fn name_is_valid(name: &str) -> bool {
        !name.is_empty() && name.chars().all(char::is_alphabetic)
    }

    /// Build a character, rolling every ability `overrides` leaves unset.
    pub fn new<R: Rng>(
        name: impl Into<String>,
        race: Race,
        class: CharacterClass,
        overrides: StatOverrides,
        rng: &mut R,
    ) -> CharacterResult<Self> {
        let name = name.into();
        if !Self::name_is_valid(&name) {
            return Err(CharacterError::InvalidName(name));
        }

        Ok(Self {
            name,
            race,
            class,
            abilities: AbilityScores::roll(overrides, rng),
        })
    }

    /// Build a character with every ability rolled.
    pub fn roll<R: Rng>(
        name: impl Into<String>,
        race: Race,
        class: CharacterClass,
        rng: &mut R,
    ) -> CharacterResult<Self> {
        Self::new(name, race, class, StatOverrides::none(), rng)
    }

    /// The character's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The character's race.
    pub fn race(&self) -> Race {
        self.race
    }

    /// The character's class.
    pub fn class(&self) -> &CharacterClass {
        &self.class
    }

    /// The character's ability scores.
    pub fn abilities(&self) -> &AbilityScores {
        &self.abilities
    }

    /// Mutable access to the ability scores. Name, race and class stay fixed.
    pub fn abilities_mut(&mut self) -> &mut AbilityScores {
        &mut self.abilities
    }

    /// Multi-line summary: a header, then one line per ability.
    pub fn describe(&self) -> String {
        let mut lines = vec![format!(
            "{}, the {} {} has the following stats:",
            self.name,
            self.race.raw_value().to_lowercase(),
            self.class.name().to_lowercase()
        )];
        for ability in Ability::ALL {
            lines.push(format!("{ability}: {}", self.abilities.get(ability)));
        }
        lines.join("\n")
    }
}

impl std::fmt::Display for Character {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn thalia() -> Character {
        let scores = AbilityScores {
            strength: 10,
            dexterity: 11,
            intellect: 12,
            wisdom: 13,
            charisma: 9,
        };
        Character::new(
            "Thalia",
            Race::Human,
            CharacterClass::Mage,
            StatOverrides::all(scores),
            &mut rng(),
        )
        .unwrap()
    }

    #[test]
    fn describe_exact_text() {
        assert_eq!(
            thalia().describe(),
            "Thalia, the human mage has the following stats:\n\
             Strength: 10\n\
             Dexterity: 11\n\
             Intellect: 12\n\
             Wisdom: 13\n\
             Charisma: 9"
        );
    }

    #[test]
    fn display_matches_describe() {
        let c = thalia();
        assert_eq!(c.to_string(), c.describe());
    }

    #[test]
    fn describe_lowercases_custom_class() {
        let c = Character::roll(
            "Vex",
            Race::Drow,
            CharacterClass::Custom("Blade Dancer".into()),
            &mut rng(),
        )
        .unwrap();
        assert!(
            c.describe()
                .starts_with("Vex, the drow blade dancer has the following stats:\n")
        );
    }

    #[test]
    fn invalid_name_rejected() {
        let err = Character::roll("R2D2", Race::Elf, CharacterClass::Rogue, &mut rng());
        assert_eq!(err, Err(CharacterError::InvalidName("R2D2".into())));
    }

    #[test]
    fn empty_name_rejected() {
        assert!(!Character::name_is_valid(""));
        assert!(Character::roll("", Race::Elf, CharacterClass::Rogue, &mut rng()).is_err());
    }

    #[test]
    fn validator_examples() {
        assert!(Character::name_is_valid("Thalia"));
        assert!(Character::name_is_valid("Éowyn"));
        assert!(!Character::name_is_valid("Mary Jane"));
        assert!(!Character::name_is_valid("O'Neil"));
        assert!(!Character::name_is_valid("Thalia\n"));
    }

    #[test]
    fn explicit_strength_preserved() {
        let c = Character::new(
            "Grom",
            Race::Dwarf,
            CharacterClass::Warrior,
            StatOverrides::none().strength(20),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(c.abilities().strength, 20);
        for ability in &Ability::ALL[1..] {
            let value = c.abilities().get(*ability);
            assert!((STAT_MIN..=STAT_MAX).contains(&value));
        }
    }

    #[test]
    fn abilities_can_change_after_creation() {
        let mut c = thalia();
        c.abilities_mut().strength = 16;
        c.abilities_mut().set(Ability::Charisma, 4);
        assert_eq!(c.abilities().strength, 16);
        assert_eq!(c.abilities().charisma, 4);
        assert_eq!(c.name(), "Thalia");
        assert!(
            c.describe()
                .ends_with("Strength: 16\nDexterity: 11\nIntellect: 12\nWisdom: 13\nCharisma: 4")
        );
    }

    #[test]
    fn getters() {
        let c = thalia();
        assert_eq!(c.name(), "Thalia");
        assert_eq!(c.race(), Race::Human);
        assert_eq!(c.class(), &CharacterClass::Mage);
    }

    #[test]
    fn serializes_flat() {
        let json = serde_json::to_value(thalia()).unwrap();
        assert_eq!(json["name"], "Thalia");
        assert_eq!(json["race"], "human");
        assert_eq!(json["class"], "Mage");
        assert_eq!(json["strength"], 10);
        assert_eq!(json["charisma"], 9);
    }

    proptest! {
        #[test]
        fn prop_alphabetic_names_are_valid(name in "[a-zA-Z]{1,24}") {
            prop_assert!(Character::name_is_valid(&name));
        }

        #[test]
        fn prop_any_non_letter_invalidates(
            prefix in "[a-zA-Z]{0,8}",
            bad in "[0-9 _\\-'.!?]",
            suffix in "[a-zA-Z]{0,8}",
        ) {
            let name = format!("{prefix}{bad}{suffix}");
            prop_assert!(!Character::name_is_valid(&name));
        }

        #[test]
        fn prop_rolled_stats_in_range(seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let c = Character::roll("Ayla", Race::Elf, CharacterClass::Druid, &mut rng).unwrap();
            for ability in Ability::ALL {
                prop_assert!((STAT_MIN..=STAT_MAX).contains(&c.abilities().get(ability)));
            }
        }

        #[test]
        fn prop_explicit_stats_untouched(value in any::<i32>(), seed in any::<u64>()) {
            let mut rng = StdRng::seed_from_u64(seed);
            let overrides = StatOverrides::none().wisdom(value);
            let c = Character::new("Ayla", Race::Elf, CharacterClass::Druid, overrides, &mut rng)
                .unwrap();
            prop_assert_eq!(c.abilities().wisdom, value);
        }
    }
}
