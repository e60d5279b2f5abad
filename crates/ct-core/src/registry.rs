//! The registry of available character classes.

use crate::class::CharacterClass;
use crate::race::Race;

/// The classes a character may choose from, in registration order.
///
/// Built once at startup and then shared read-only with the factory.
/// Registering a class whose name is already present, in any case, does
/// nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassRegistry {
    classes: Vec<CharacterClass>,
}

impl ClassRegistry {
    /// Create a registry with no classes.
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
        }
    }

    /// Create a registry holding the five built-in classes.
    pub fn with_built_ins() -> Self {
        let mut registry = Self::new();
        for class in CharacterClass::built_ins() {
            registry.register(class);
        }
        registry
    }

    /// Append a class unless one with the same name is already registered.
    /// Returns true if added.
    pub fn register(&mut self, class: CharacterClass) -> bool {
        let name = class.name().to_lowercase();
        if self.classes.iter().any(|c| c.name().to_lowercase() == name) {
            tracing::debug!(class = %class, "class already registered");
            return false;
        }
        tracing::debug!(class = %class, "registered class");
        self.classes.push(class);
        true
    }

    /// Registered classes, in registration order.
    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    /// Every race, in declaration order.
    pub fn races(&self) -> &'static [Race] {
        &Race::ALL
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Returns true if no class is registered.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassRegistry {
    fn default() -> Self {
        Self::with_built_ins()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn built_ins_in_order() {
        let registry = ClassRegistry::with_built_ins();
        assert_eq!(registry.classes(), CharacterClass::built_ins().as_slice());
        assert_eq!(registry.len(), 5);
    }

    #[test]
    fn new_is_empty() {
        let registry = ClassRegistry::new();
        assert!(registry.is_empty());
    }

    #[test]
    fn register_is_idempotent() {
        let mut registry = ClassRegistry::new();
        assert!(registry.register(CharacterClass::Mage));
        assert!(!registry.register(CharacterClass::Mage));
        assert_eq!(registry.classes(), &[CharacterClass::Mage]);
    }

    #[test]
    fn custom_classes_append() {
        let mut registry = ClassRegistry::default();
        assert!(registry.register(CharacterClass::Custom("Bard".into())));
        assert!(!registry.register(CharacterClass::Custom("Bard".into())));
        assert!(!registry.register(CharacterClass::Warrior));
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.classes()[5].name(), "Bard");
    }

    #[test]
    fn names_differing_only_in_case_are_duplicates() {
        let mut registry = ClassRegistry::default();
        assert!(registry.register(CharacterClass::Custom("Bard".into())));
        assert!(!registry.register(CharacterClass::Custom("bard".into())));
        assert!(!registry.register(CharacterClass::Custom("WARRIOR".into())));
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.classes()[5].name(), "Bard");
    }

    #[test]
    fn races_in_declaration_order() {
        let registry = ClassRegistry::new();
        assert_eq!(
            registry.races(),
            &[Race::Human, Race::Dwarf, Race::Elf, Race::Drow]
        );
    }
}
