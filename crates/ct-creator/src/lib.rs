//! Interactive character creation for Character Thing.
//!
//! A [`CharacterFactory`] walks a user through three stages (name, race,
//! class), re-prompting on invalid input and asking for confirmation after
//! each one. All I/O goes through the line-oriented [`Console`] trait so the
//! dialogue can be driven from a terminal or from a script.

pub mod config;
pub mod console;
pub mod factory;

pub use config::CreatorConfig;
pub use console::{Console, ScriptedConsole, StdConsole};
pub use factory::{CharacterFactory, parse_answer};
