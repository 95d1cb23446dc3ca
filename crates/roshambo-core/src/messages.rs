//! Message catalog for user-facing text.
//!
//! The engine emits structured results; callers turn them into rendered
//! strings through stable keys with named substitution arguments. The
//! built-in catalog covers every key the CLI uses; a user-supplied JSON
//! catalog can overlay any subset of the entries.

use std::collections::HashMap;

use crate::error::{GameError, GameResult};

/// Built-in English messages.
const DEFAULT_MESSAGES: [(&str, &str); 12] = [
    ("welcome", "Welcome to Rock, Paper, Scissors, Lizard, Spock!"),
    ("choose_prompt", "Choose one: {choices}"),
    ("error_invalid", "That is not a valid choice. Try again."),
    ("user_choice", "You chose {challenger_choice}."),
    ("computer_choice", "The computer chose {opponent_choice}."),
    ("result_draw", "Both played {challenger_choice}. It's a draw!"),
    ("user_wins", "You win! {challenger_choice} beats {opponent_choice}."),
    ("user_loses", "You lose! {opponent_choice} beats {challenger_choice}."),
    ("score", "Score: you {challenger_score}, computer {opponent_score}."),
    (
        "grand_winner",
        "{winner} takes the match, {challenger_score} to {opponent_score}!",
    ),
    ("continue_playing", "Play again? (y/n)"),
    ("thanks_for_playing", "Thanks for playing!"),
];

/// A string-keyed message table with `{name}` substitution.
#[derive(Debug, Clone)]
pub struct MessageCatalog {
    messages: HashMap<String, String>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let messages = DEFAULT_MESSAGES
            .iter()
            .map(|(key, text)| ((*key).to_string(), (*text).to_string()))
            .collect();
        Self { messages }
    }
}

impl MessageCatalog {
    /// Parse a catalog from a JSON object of key/template pairs.
    pub fn from_json_str(json: &str) -> GameResult<Self> {
        let messages: HashMap<String, String> = serde_json::from_str(json)
            .map_err(|e| GameError::Configuration(format!("bad message catalog: {e}")))?;
        Ok(Self { messages })
    }

    /// Overlay another catalog's entries on this one.
    pub fn merge(&mut self, other: Self) {
        self.messages.extend(other.messages);
    }

    /// Whether the catalog has a template for the key.
    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    /// Render the template for `key`, substituting `{name}` placeholders
    /// from `args`.
    ///
    /// Unknown keys are an error, never an empty string. Placeholders
    /// with no matching argument are left as written, so catalog
    /// mistakes stay visible.
    pub fn render(&self, key: &str, args: &[(&str, &str)]) -> GameResult<String> {
        let template = self
            .messages
            .get(key)
            .ok_or_else(|| GameError::UnknownMessage(key.to_string()))?;
        let mut text = template.clone();
        for (name, value) in args {
            text = text.replace(&format!("{{{name}}}"), value);
        }
        Ok(text)
    }
}
