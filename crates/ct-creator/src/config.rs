//! Configuration for a character creation session.

/// Configuration for a [`CharacterFactory`](crate::CharacterFactory).
#[derive(Debug, Clone)]
pub struct CreatorConfig {
    /// Answer used when a stage confirmation is left blank.
    pub confirm_default: bool,
    /// Answer used when "continue creating another character?" is left blank.
    pub continue_default: bool,
    /// RNG seed for reproducible ability rolls. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for CreatorConfig {
    fn default() -> Self {
        Self {
            confirm_default: true,
            continue_default: true,
            seed: None,
        }
    }
}

impl CreatorConfig {
    /// Set the default answer for stage confirmations.
    pub fn with_confirm_default(mut self, answer: bool) -> Self {
        self.confirm_default = answer;
        self
    }

    /// Set the default answer for the continue question.
    pub fn with_continue_default(mut self, answer: bool) -> Self {
        self.continue_default = answer;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
