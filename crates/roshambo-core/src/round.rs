//! One played round: opponent draw, resolution, scoring, and the report.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::choice::{Choice, ShorthandTable};
use crate::error::GameResult;
use crate::rules::{RoundOutcome, Ruleset};
use crate::score::{GameMode, SessionResult, SessionScore};

/// Supplies the opponent's choice for each round.
pub trait ChoiceSource {
    /// Produce the next opponent choice.
    fn draw(&mut self) -> Choice;
}

/// Draws uniformly from the five choices with a seeded generator.
#[derive(Debug)]
pub struct UniformSource {
    rng: StdRng,
}

impl UniformSource {
    /// Create a source seeded for reproducible draws.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ChoiceSource for UniformSource {
    fn draw(&mut self) -> Choice {
        Choice::ALL[self.rng.random_range(0..Choice::ALL.len())]
    }
}

/// Everything the caller needs to render one played round.
#[derive(Debug, Clone, Copy)]
pub struct RoundReport {
    /// The challenger's normalized choice.
    pub challenger: Choice,
    /// The opponent's drawn choice.
    pub opponent: Choice,
    /// The round outcome from the challenger's perspective.
    pub outcome: RoundOutcome,
    /// The score after this round.
    pub score: SessionScore,
    /// Set when this round ended the session.
    pub session_result: Option<SessionResult>,
}

/// Play a single round.
///
/// Normalizes the challenger's raw input, draws the opponent's choice,
/// resolves the outcome, applies it to the score, and checks whether the
/// session is over. Invalid input returns before anything is drawn or
/// mutated, so the caller can re-prompt and retry with the same score.
pub fn play_round(
    raw: &str,
    shorthand: &ShorthandTable,
    rules: &Ruleset,
    source: &mut dyn ChoiceSource,
    score: &mut SessionScore,
    mode: GameMode,
) -> GameResult<RoundReport> {
    let challenger = shorthand.normalize(raw)?;
    let opponent = source.draw();
    let outcome = rules.resolve(challenger, opponent);
    score.apply(outcome);

    Ok(RoundReport {
        challenger,
        opponent,
        outcome,
        score: *score,
        session_result: score.is_complete(mode),
    })
}
