//! Core types for Character Thing.
//!
//! Defines the closed set of races, the open set of character classes with
//! its [`ClassRegistry`], input resolution for numbered menus, and the
//! immutable [`Character`] record with its randomized ability scores.

pub mod character;
pub mod class;
pub mod error;
pub mod race;
pub mod registry;
pub mod resolve;

pub use character::{
    Ability, AbilityScores, Character, STAT_MAX, STAT_MIN, StatOverrides,
};
pub use class::CharacterClass;
pub use error::{CharacterError, CharacterResult};
pub use race::Race;
pub use registry::ClassRegistry;
pub use resolve::{Choice, listing, resolve, resolve_with};
