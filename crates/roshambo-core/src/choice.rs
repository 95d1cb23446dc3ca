//! Game choices and input normalization.
//!
//! Raw user text is trimmed and lowercased, matched against full choice
//! names first, then against the shorthand table. There is no partial or
//! fuzzy matching; shorthand keys are checked against full names at
//! construction so the two lookups can never disagree.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

/// One of the five symbols a party may play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    /// Crushes scissors and lizard.
    Rock,
    /// Covers rock and disproves spock.
    Paper,
    /// Cuts paper and decapitates lizard.
    Scissors,
    /// Eats paper and poisons spock.
    Lizard,
    /// Vaporizes rock and smashes scissors.
    Spock,
}

impl Choice {
    /// All five choices in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Lizard,
        Self::Spock,
    ];

    /// The lowercase full name of this choice.
    pub fn name(self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Paper => "paper",
            Self::Scissors => "scissors",
            Self::Lizard => "lizard",
            Self::Spock => "spock",
        }
    }

    /// Match an exact full name. Expects already-trimmed, lowercased input.
    fn from_name(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == s)
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps short input codes to full choices.
///
/// Keys are trimmed and lowercased at construction. Construction fails
/// with a configuration error if a key is empty, collides with a full
/// choice name, or repeats another key.
#[derive(Debug, Clone)]
pub struct ShorthandTable {
    map: HashMap<String, Choice>,
}

impl ShorthandTable {
    /// The standard codes: `r`, `p`, `sc`, `l`, `sp`.
    pub fn standard() -> Self {
        let map = [
            ("r", Choice::Rock),
            ("p", Choice::Paper),
            ("sc", Choice::Scissors),
            ("l", Choice::Lizard),
            ("sp", Choice::Spock),
        ]
        .into_iter()
        .map(|(code, choice)| (code.to_string(), choice))
        .collect();
        Self { map }
    }

    /// Build a table from code/choice pairs, validating every key.
    pub fn new<I>(pairs: I) -> GameResult<Self>
    where
        I: IntoIterator<Item = (String, Choice)>,
    {
        let mut map = HashMap::new();
        for (raw_code, choice) in pairs {
            let code = raw_code.trim().to_lowercase();
            if code.is_empty() {
                return Err(GameError::Configuration(
                    "empty shorthand code".to_string(),
                ));
            }
            if Choice::from_name(&code).is_some() {
                return Err(GameError::Configuration(format!(
                    "shorthand '{code}' collides with a full choice name"
                )));
            }
            if map.insert(code.clone(), choice).is_some() {
                return Err(GameError::Configuration(format!(
                    "duplicate shorthand '{code}'"
                )));
            }
        }
        Ok(Self { map })
    }

    /// Look up a code. Expects already-trimmed, lowercased input.
    pub fn get(&self, code: &str) -> Option<Choice> {
        self.map.get(code).copied()
    }

    /// The code mapped to the given choice, if any.
    pub fn code_for(&self, choice: Choice) -> Option<&str> {
        self.map
            .iter()
            .find(|(_, mapped)| **mapped == choice)
            .map(|(code, _)| code.as_str())
    }

    /// Normalize raw user text to a choice.
    ///
    /// Trims and lowercases the input, matches the full name first, then
    /// the shorthand table. Anything else is an [`GameError::InvalidChoice`].
    pub fn normalize(&self, raw: &str) -> GameResult<Choice> {
        let text = raw.trim().to_lowercase();
        if let Some(choice) = Choice::from_name(&text) {
            return Ok(choice);
        }
        self.get(&text)
            .ok_or_else(|| GameError::InvalidChoice(raw.trim().to_string()))
    }
}
