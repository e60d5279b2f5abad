//! The character creation dialogue.
//!
//! Each stage loops until its input is valid and the user confirms it.
//! Invalid input is reported and the stage re-prompted; end of input aborts
//! the whole creation with [`CharacterError::InputAborted`].

use rand::SeedableRng;
use rand::rngs::StdRng;

use ct_core::{
    Character, CharacterClass, CharacterError, CharacterResult, ClassRegistry, Race, listing,
    resolve,
};

use crate::config::CreatorConfig;
use crate::console::Console;

/// Drives the name, race and class prompts and builds the character.
pub struct CharacterFactory<'r, C: Console> {
    console: C,
    registry: &'r ClassRegistry,
    config: CreatorConfig,
    rng: StdRng,
}

impl<'r, C: Console> CharacterFactory<'r, C> {
    /// Create a factory that talks through `console` and offers the classes
    /// in `registry`.
    pub fn new(console: C, registry: &'r ClassRegistry, config: CreatorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            console,
            registry,
            config,
            rng,
        }
    }

    /// The console this factory talks through.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Consume the factory and hand back its console.
    pub fn into_console(self) -> C {
        self.console
    }

    /// Run one full dialogue and return the confirmed character.
    pub fn create_character(&mut self) -> CharacterResult<Character> {
        let name = self.choose_name()?;
        let race = self.choose_race()?;
        let class = self.choose_class()?;

        let character = Character::roll(name, race, class, &mut self.rng)?;
        tracing::info!(
            name = character.name(),
            race = %character.race(),
            class = %character.class(),
            "character created"
        );
        Ok(character)
    }

    /// Create characters until the user declines to continue or input ends.
    ///
    /// Each character's description is printed followed by a blank line.
    /// Returns every character created during the session.
    pub fn create_characters(&mut self) -> Vec<Character> {
        self.create_characters_with(Character::describe)
    }

    /// Like [`create_characters`](Self::create_characters), printing each
    /// character with `render` instead of its description.
    pub fn create_characters_with<F>(&mut self, render: F) -> Vec<Character>
    where
        F: Fn(&Character) -> String,
    {
        let mut created = Vec::new();

        loop {
            match self.create_character() {
                Ok(character) => {
                    self.console.write_line(&render(&character));
                    self.console.write_line("");
                    created.push(character);
                }
                Err(e) => {
                    self.console
                        .write_line(&format!("Error creating character: {e}"));
                    if e.is_fatal() {
                        tracing::info!(error = %e, "ending session");
                        break;
                    }
                }
            }

            match self.confirm(
                "Continue creating another character?",
                self.config.continue_default,
            ) {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    tracing::info!(error = %e, "ending session");
                    break;
                }
            }
        }

        tracing::debug!(count = created.len(), "session finished");
        created
    }

    /// Prompt for a name until a valid one is confirmed.
    pub fn choose_name(&mut self) -> CharacterResult<String> {
        self.stage("name", Self::read_name, |name: &String| name.clone())
    }

    /// Prompt for a race until a valid one is confirmed.
    pub fn choose_race(&mut self) -> CharacterResult<Race> {
        self.stage("race", Self::read_race, |race: &Race| {
            race.raw_value().to_string()
        })
    }

    /// Prompt for a class until a valid one is confirmed.
    pub fn choose_class(&mut self) -> CharacterResult<CharacterClass> {
        self.stage("class", Self::read_class, |class: &CharacterClass| {
            class.name().to_string()
        })
    }

    /// Ask a yes/no question until it gets a recognizable answer.
    ///
    /// A blank answer takes `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> CharacterResult<bool> {
        let hint = if default { "Y/n" } else { "y/N" };
        loop {
            self.console.write(&format!("{question}: [{hint}] "));
            let input = self.read()?;
            if let Some(answer) = parse_answer(&input, default) {
                return Ok(answer);
            }
            self.console.write_line("Invalid input. Try again.");
            self.console.write_line("");
        }
    }

    /// One stage: read a value, retry on recoverable errors, then confirm.
    fn stage<T, F, S>(&mut self, stage: &'static str, mut ask: F, show: S) -> CharacterResult<T>
    where
        F: FnMut(&mut Self) -> CharacterResult<T>,
        S: Fn(&T) -> String,
    {
        loop {
            let value = match ask(self) {
                Ok(value) => value,
                Err(e) if e.is_fatal() => {
                    tracing::debug!(stage, "input ended before the stage finished");
                    return Err(e);
                }
                Err(e) => {
                    tracing::debug!(stage, error = %e, "rejected input");
                    self.report(&e);
                    continue;
                }
            };

            let question = format!("Is {} correct?", show(&value));
            if self.confirm(&question, self.config.confirm_default)? {
                tracing::debug!(stage, "stage confirmed");
                return Ok(value);
            }
        }
    }

    fn read_name(&mut self) -> CharacterResult<String> {
        self.console.write("Character Name: ");
        let name = self.read()?;
        if Character::name_is_valid(&name) {
            Ok(name)
        } else {
            Err(CharacterError::InvalidName(name))
        }
    }

    fn read_race(&mut self) -> CharacterResult<Race> {
        let races = self.registry.races();
        self.console.write(&format!(
            "Choose a race from the following:\n{}\n[]: ",
            listing(races)
        ));
        let input = self.read()?;
        resolve(&input, races).copied()
    }

    fn read_class(&mut self) -> CharacterResult<CharacterClass> {
        let classes = self.registry.classes();
        self.console.write(&format!(
            "Choose a class from the following:\n{}\n[]: ",
            listing(classes)
        ));
        let input = self.read()?;
        resolve(&input, classes).cloned()
    }

    fn read(&mut self) -> CharacterResult<String> {
        self.console.read_line().ok_or(CharacterError::InputAborted)
    }

    fn report(&mut self, error: &CharacterError) {
        self.console.write_line(&format!("Error: {error}"));
        self.console.write_line("");
    }
}

/// Interpret a yes/no answer. Blank input gives `default`; unrecognized
/// input gives `None`.
pub fn parse_answer(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" => Some(default),
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}
