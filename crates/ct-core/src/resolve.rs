//! Resolving raw menu input to a concrete candidate.
//!
//! Input is read first as a 1-based position in the menu, then as the name
//! of one of the candidates.

use crate::error::{CharacterError, CharacterResult};

/// A value that can be offered in a numbered menu.
pub trait Choice {
    /// The canonical name user input is matched against.
    fn choice_name(&self) -> &str;
}

/// Resolve `input` against `candidates` by index or case-insensitive name.
pub fn resolve<'a, T: Choice>(input: &str, candidates: &'a [T]) -> CharacterResult<&'a T> {
    resolve_with(input, candidates, |candidate, text| {
        candidate.choice_name().to_lowercase() == text.to_lowercase()
    })
}

/// Resolve `input` by index, falling back to a caller-supplied name match.
pub fn resolve_with<'a, T, F>(
    input: &str,
    candidates: &'a [T],
    name_match: F,
) -> CharacterResult<&'a T>
where
    F: Fn(&T, &str) -> bool,
{
    let trimmed = input.trim();

    if let Ok(index) = trimmed.parse::<usize>() {
        if (1..=candidates.len()).contains(&index) {
            tracing::debug!(index, "resolved choice by position");
            return Ok(&candidates[index - 1]);
        }
    }

    candidates
        .iter()
        .find(|candidate| name_match(candidate, trimmed))
        .ok_or_else(|| CharacterError::InvalidChoice(input.to_string()))
}

/// Render candidates as a numbered menu, one per line.
pub fn listing<T: Choice>(candidates: &[T]) -> String {
    candidates
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, capitalize_words(c.choice_name())))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Upper-case the first letter of each word and lower-case the rest.
fn capitalize_words(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
