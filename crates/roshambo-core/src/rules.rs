//! The adjacency table and outcome resolution.
//!
//! Which choice defeats which is data validated at construction, not a
//! branch per choice. A valid table decides every pair of distinct
//! choices in exactly one direction, with each choice defeating exactly
//! two others, so resolution needs only one lookup.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::{GameError, GameResult};

/// The outcome of a single round, from the challenger's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// The challenger's choice defeats the opponent's.
    Win,
    /// The opponent's choice defeats the challenger's.
    Loss,
    /// Both parties played the same choice.
    Draw,
}

impl std::fmt::Display for RoundOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::Loss => write!(f, "loss"),
            Self::Draw => write!(f, "draw"),
        }
    }
}

/// The classic five-way table: each row lists what the choice defeats.
const STANDARD_DEFEATS: [(Choice, [Choice; 2]); 5] = [
    (Choice::Rock, [Choice::Scissors, Choice::Lizard]),
    (Choice::Paper, [Choice::Rock, Choice::Spock]),
    (Choice::Scissors, [Choice::Paper, Choice::Lizard]),
    (Choice::Lizard, [Choice::Paper, Choice::Spock]),
    (Choice::Spock, [Choice::Rock, Choice::Scissors]),
];

/// Maps each choice to the choices it defeats.
#[derive(Debug, Clone)]
pub struct Ruleset {
    beats: HashMap<Choice, Vec<Choice>>,
}

impl Ruleset {
    /// The classic rock-paper-scissors-lizard-spock table.
    pub fn standard() -> Self {
        let beats = STANDARD_DEFEATS
            .iter()
            .map(|(choice, defeated)| (*choice, defeated.to_vec()))
            .collect();
        Self { beats }
    }

    /// Build a ruleset from defeat lists, validating the tournament shape.
    ///
    /// Every choice must be present, defeat exactly two distinct others,
    /// never itself, and every pair of distinct choices must be decided in
    /// exactly one direction.
    pub fn new(beats: HashMap<Choice, Vec<Choice>>) -> GameResult<Self> {
        for choice in Choice::ALL {
            let Some(defeated) = beats.get(&choice) else {
                return Err(GameError::Configuration(format!(
                    "no defeat list for {choice}"
                )));
            };
            if defeated.contains(&choice) {
                return Err(GameError::Configuration(format!(
                    "{choice} cannot defeat itself"
                )));
            }
            if defeated.len() != 2 || defeated[0] == defeated[1] {
                return Err(GameError::Configuration(format!(
                    "{choice} must defeat exactly two distinct choices"
                )));
            }
        }
        for a in Choice::ALL {
            for b in Choice::ALL {
                if a == b {
                    continue;
                }
                let forward = beats[&a].contains(&b);
                let backward = beats[&b].contains(&a);
                if forward && backward {
                    return Err(GameError::Configuration(format!(
                        "{a} and {b} both defeat each other"
                    )));
                }
                if !forward && !backward {
                    return Err(GameError::Configuration(format!(
                        "neither {a} nor {b} defeats the other"
                    )));
                }
            }
        }
        Ok(Self { beats })
    }

    /// The choices the given choice defeats.
    pub fn defeats(&self, choice: Choice) -> &[Choice] {
        self.beats.get(&choice).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Resolve one round from the challenger's perspective.
    ///
    /// Equal choices draw; otherwise exactly one party's defeat list
    /// contains the other's choice, so a single lookup decides it.
    pub fn resolve(&self, challenger: Choice, opponent: Choice) -> RoundOutcome {
        if challenger == opponent {
            return RoundOutcome::Draw;
        }
        if self.defeats(challenger).contains(&opponent) {
            RoundOutcome::Win
        } else {
            RoundOutcome::Loss
        }
    }
}

impl Default for Ruleset {
    fn default() -> Self {
        Self::standard()
    }
}
